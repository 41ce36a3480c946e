const SETTINGS: &str = "src/default_settings.toml";
const SECTIONS: [&str; 3] = ["search", "dictionary", "display"];

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS}");

    let value: toml::Value = include_str!("src/default_settings.toml")
        .parse()
        .unwrap_or_else(|e| panic!("{SETTINGS} contains invalid TOML: {e}"));
    for section in SECTIONS {
        if value.get(section).and_then(toml::Value::as_table).is_none() {
            panic!("{SETTINGS} is missing the [{section}] table");
        }
    }
}
