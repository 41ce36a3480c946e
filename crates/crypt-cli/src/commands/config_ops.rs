use std::fs;

pub fn settings_export() {
    print!("{}", crypt_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        crypt_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: search.max_results={}, search.progress_interval={}, dictionary.paths={}",
        s.search.max_results,
        s.search.progress_interval,
        s.dictionary.paths.len()
    );
}
