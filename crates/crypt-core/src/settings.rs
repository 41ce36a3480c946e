//! Tool settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` parses and validates a complete settings file
//! - `Settings::load(path)` reads a file, or falls back to the embedded defaults
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::search::SearchConfig;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub dictionary: DictionarySettings,
    pub display: DisplaySettings,
    #[serde(default)]
    pub stats: StatsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub max_results: usize,
    pub progress_interval: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub column_width: usize,
    pub max_width: usize,
    pub indent: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsSettings {
    #[serde(default)]
    pub bigram_table: Option<PathBuf>,
}

impl Settings {
    /// Read settings from `path`, or use the defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|source| SettingsError::Io {
                    path: p.to_path_buf(),
                    source,
                })?;
                parse_settings_toml(&content)
            }
            None => parse_settings_toml(DEFAULT_SETTINGS_TOML),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_results: Some(self.search.max_results),
            progress_interval: self.search.progress_interval,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        // Checked at build time and by `parse_default_toml`.
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(search.max_results);
    check_positive!(search.progress_interval);
    check_positive!(display.column_width);
    check_positive!(display.max_width);

    if s.dictionary.paths.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "dictionary.paths".to_string(),
            reason: "at least one word list is required".to_string(),
        });
    }
    if s.display.indent >= s.display.max_width {
        return Err(SettingsError::InvalidValue {
            field: "display.indent".to_string(),
            reason: "must be smaller than display.max_width".to_string(),
        });
    }

    Ok(())
}
