//! Candidate filtering: which dictionary words could a cipher token be?
//!
//! A word is structurally compatible with a token when it has the same
//! length, the same number of distinct letters as the token has distinct
//! symbols, repeats letters exactly where the token repeats a symbol, and
//! carries the token's fixed letters at their positions.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::dict::WordIndex;
use crate::token::{CipherToken, Symbol};

/// Rank-ordered words compatible with one cipher token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    words: Vec<String>,
}

impl CandidateList {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, rank: usize) -> Option<&str> {
        self.words.get(rank).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn distinct_letters(word: &[u8]) -> usize {
    let mut mask = 0u32;
    for &b in word {
        mask |= 1 << (b - b'a');
    }
    mask.count_ones() as usize
}

/// Check whether `word` fits the letter pattern of `token`.
///
/// Words containing anything other than `a-z` never match: the
/// substitution alphabet covers letters only.
pub fn is_match(token: &CipherToken, word: &str) -> bool {
    let w = word.as_bytes();
    let t = token.symbols();
    if w.len() != t.len() || !w.iter().all(u8::is_ascii_lowercase) {
        return false;
    }
    if distinct_letters(w) != token.distinct_symbols() {
        return false;
    }
    for i in 0..t.len() {
        if let Symbol::Fixed(c) = t[i] {
            if w[i] != c {
                return false;
            }
        }
        for j in i + 1..t.len() {
            if t[i] == t[j] && w[i] != w[j] {
                return false;
            }
        }
    }
    true
}

/// Select the words of `bucket` compatible with `token`, keeping rank order.
pub fn filter(token: &CipherToken, bucket: &[String]) -> CandidateList {
    let words = bucket
        .iter()
        .filter(|w| is_match(token, w))
        .cloned()
        .collect();
    CandidateList { words }
}

/// Filter `token` against the matching length bucket of `index`.
pub fn candidates_for(token: &CipherToken, index: &WordIndex) -> CandidateList {
    let _span = debug_span!("candidates_for", token = token.as_str()).entered();
    let bucket = index.bucket(token.len());
    let list = filter(token, bucket);
    debug!(bucket = bucket.len(), matched = list.len());
    list
}
