macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod match_ops;
pub mod stats_ops;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use crypt_core::dict::{DictError, WordIndex};
use crypt_core::settings::{Settings, SettingsError};
use crypt_core::stats::{BigramTable, StatsError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Dict(#[from] DictError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Options shared by both binaries.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub config: Option<PathBuf>,
    /// Word lists replacing `[dictionary] paths` when non-empty.
    pub dicts: Vec<PathBuf>,
    pub max_results: Option<NonZeroUsize>,
}

/// Settings file (or defaults) with command-line overrides applied.
pub fn load_settings(opts: &Options) -> Result<Settings, LoadError> {
    let mut settings = Settings::load(opts.config.as_deref())?;
    if !opts.dicts.is_empty() {
        settings.dictionary.paths = opts.dicts.clone();
    }
    if let Some(n) = opts.max_results {
        settings.search.max_results = n.get();
    }
    Ok(settings)
}

pub fn load_index(settings: &Settings) -> Result<WordIndex, LoadError> {
    Ok(WordIndex::load(&settings.dictionary.paths)?)
}

/// The configured English bigram table, if any.
pub fn load_bigrams(settings: &Settings) -> Result<Option<BigramTable>, LoadError> {
    match &settings.stats.bigram_table {
        Some(path) => Ok(Some(BigramTable::load(path)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn overrides_replace_file_values() {
        let opts = Options {
            config: None,
            dicts: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
            max_results: NonZeroUsize::new(3),
        };
        let s = load_settings(&opts).unwrap();
        assert_eq!(s.dictionary.paths, opts.dicts);
        assert_eq!(s.search.max_results, 3);
    }

    #[test]
    fn defaults_without_overrides() {
        let s = load_settings(&Options::default()).unwrap();
        assert_eq!(s.search.max_results, 20);
        assert!(load_bigrams(&s).unwrap().is_none());
    }

    #[test]
    fn config_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = crypt_core::settings::default_toml().replace("max_results = 20", "max_results = 7");
        file.write_all(toml.as_bytes()).unwrap();
        let opts = Options {
            config: Some(file.path().to_path_buf()),
            ..Options::default()
        };
        assert_eq!(load_settings(&opts).unwrap().search.max_results, 7);
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let opts = Options {
            dicts: vec![PathBuf::from("/nonexistent/words.txt")],
            ..Options::default()
        };
        let s = load_settings(&opts).unwrap();
        assert!(matches!(load_index(&s), Err(LoadError::Dict(_))));
    }
}
