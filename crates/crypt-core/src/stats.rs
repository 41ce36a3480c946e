//! Letter and bigram frequency statistics.
//!
//! `BigramTable` maps lowercase letter bigrams (`"aa"`..`"zz"`) to their share
//! of all bigrams in a text. Tables are stored as a flat JSON object.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// English letters from most to least frequent.
pub const ENGLISH_LETTER_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("cannot access bigram table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid bigram table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Letters of `text` (case-folded) with their counts, most frequent first.
/// Ties are broken alphabetically.
pub fn letter_frequencies(text: &str) -> Vec<(char, usize)> {
    let mut counts = [0usize; 26];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        counts[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
    }
    let mut freqs: Vec<(char, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(i, &n)| ((b'a' + i as u8) as char, n))
        .collect();
    freqs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    freqs
}

/// Count letter bigrams inside whitespace-separated words. Non-ASCII
/// characters are dropped first; pairs involving anything but `a-z` after
/// lower-casing are skipped.
pub fn bigram_counts(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in text.split_whitespace() {
        let bytes: Vec<u8> = word
            .bytes()
            .filter(u8::is_ascii)
            .map(|b| b.to_ascii_lowercase())
            .collect();
        for pair in bytes.windows(2) {
            if pair.iter().all(u8::is_ascii_lowercase) {
                let bigram = String::from_utf8_lossy(pair).into_owned();
                *counts.entry(bigram).or_insert(0) += 1;
            }
        }
    }
    counts
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BigramTable {
    freqs: BTreeMap<String, f64>,
}

impl BigramTable {
    /// Relative bigram frequencies of `text`; they sum to 1 unless the text
    /// has no bigrams at all.
    pub fn from_text(text: &str) -> Self {
        let counts = bigram_counts(text);
        let total: usize = counts.values().sum();
        let freqs = counts
            .into_iter()
            .map(|(k, n)| (k, n as f64 / total as f64))
            .collect();
        Self { freqs }
    }

    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let content = fs::read_to_string(path).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table: Self = serde_json::from_str(&content)?;
        debug!(path = %path.display(), bigrams = table.len());
        Ok(table)
    }

    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, bigram: &str) -> f64 {
        self.freqs.get(bigram).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// The `n` most frequent bigrams, ties alphabetical.
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut all: Vec<(&str, f64)> = self.freqs.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        all.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(b.0)));
        all.truncate(n);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_frequencies_sorted() {
        let f = letter_frequencies("jtx xll, Dbdimmwk");
        assert_eq!(&f[..3], &[('d', 2), ('l', 2), ('m', 2)]);
        assert_eq!(f.iter().map(|(_, n)| n).sum::<usize>(), 14);
        assert!(!f.iter().any(|(c, _)| *c == ','));
    }

    #[test]
    fn letter_frequencies_empty() {
        assert!(letter_frequencies(" ... ").is_empty());
    }

    #[test]
    fn english_order_is_an_alphabet() {
        let mut letters: Vec<char> = ENGLISH_LETTER_ORDER.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn bigrams_stay_inside_words() {
        let c = bigram_counts("The cat, theN don't");
        assert_eq!(c.get("th"), Some(&2));
        assert_eq!(c.get("he"), Some(&2));
        assert_eq!(c.get("en"), Some(&1));
        // no bigram across the space or the apostrophe
        assert_eq!(c.get("ec"), None);
        assert_eq!(c.get("nt"), None);
        assert_eq!(c.get("t,"), None);
    }

    #[test]
    fn bigram_table_sums_to_one() {
        let t = BigramTable::from_text("hello there, hello");
        let sum: f64 = t.top(usize::MAX).iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(t.top(1)[0].0, "he");
        assert_eq!(t.get("zz"), 0.0);
    }

    #[test]
    fn bigram_table_of_text_without_bigrams() {
        let t = BigramTable::from_text("a b c");
        assert!(t.is_empty());
    }

    #[test]
    fn bigram_table_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bigram_freqs.json");
        let t = BigramTable::from_text("one two three");
        t.save(&path).unwrap();
        let loaded = BigramTable::load(&path).unwrap();
        assert_eq!(loaded.len(), t.len());
        assert!((loaded.get("th") - t.get("th")).abs() < 1e-12);
    }

    #[test]
    fn bigram_table_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(BigramTable::load(&path), Err(StatsError::Json(_))));
    }
}
