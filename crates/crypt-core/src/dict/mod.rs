//! Word lists grouped by length.
//!
//! `WordIndex` keeps every length bucket in source order. A word's position
//! inside its bucket is its rank: earlier words are treated as more likely.


use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span};

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no word list given")]
    NoSources,
}

/// Dictionary words keyed by character length.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    buckets: BTreeMap<usize, Vec<String>>,
    total: usize,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from words in rank order. Entries are trimmed and
    /// lower-cased; blank entries are skipped. Duplicates are kept.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for w in words {
            index.insert(w.as_ref());
        }
        index
    }

    /// Load one or more word-list files, one word per line. Buckets keep the
    /// order of `paths` and then of lines within each file.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, DictError> {
        if paths.is_empty() {
            return Err(DictError::NoSources);
        }
        let _span = debug_span!("load_dictionary", sources = paths.len()).entered();
        let mut index = Self::new();
        for path in paths {
            let path = path.as_ref();
            let text = fs::read_to_string(path).map_err(|source| DictError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            index.extend_from_text(&text);
            debug!(path = %path.display(), total = index.total);
        }
        Ok(index)
    }

    /// Add every line of `text` as a word.
    pub fn extend_from_text(&mut self, text: &str) {
        for line in text.lines() {
            self.insert(line);
        }
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        self.buckets
            .entry(word.chars().count())
            .or_default()
            .push(word);
        self.total += 1;
    }

    /// Words of exactly `len` characters, in rank order.
    pub fn bucket(&self, len: usize) -> &[String] {
        self.buckets.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Word lengths present, shortest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
