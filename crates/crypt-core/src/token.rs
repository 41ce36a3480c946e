//! Cipher tokens: one ciphertext word, split into free and fixed letters.
//!
//! Lowercase letters are free placeholders still to be solved. Uppercase
//! letters are fixed: they must decode to themselves (case-folded). A free
//! `e` and a fixed `E` are different symbols.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("empty cipher token")]
    Empty,
    #[error("cipher token {token:?} contains non-letter {ch:?}")]
    NonLetter { token: String, ch: char },
}

/// One position of a cipher token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Unsolved cipher letter (`b'a'..=b'z'`).
    Free(u8),
    /// Letter that must decode to itself (`b'a'..=b'z'`).
    Fixed(u8),
}

impl Symbol {
    pub fn letter(self) -> u8 {
        match self {
            Symbol::Free(c) | Symbol::Fixed(c) => c,
        }
    }

    pub fn is_fixed(self) -> bool {
        matches!(self, Symbol::Fixed(_))
    }
}

/// A parsed, immutable cipher token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherToken {
    raw: String,
    symbols: Vec<Symbol>,
    distinct: usize,
}

impl CipherToken {
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        if raw.is_empty() {
            return Err(TokenError::Empty);
        }
        let mut symbols = Vec::with_capacity(raw.len());
        for ch in raw.chars() {
            let sym = if ch.is_ascii_lowercase() {
                Symbol::Free(ch as u8)
            } else if ch.is_ascii_uppercase() {
                Symbol::Fixed(ch.to_ascii_lowercase() as u8)
            } else {
                return Err(TokenError::NonLetter {
                    token: raw.to_string(),
                    ch,
                });
            };
            symbols.push(sym);
        }

        let mut seen: Vec<Symbol> = Vec::new();
        for &s in &symbols {
            if !seen.contains(&s) {
                seen.push(s);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            distinct: seen.len(),
            symbols,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of distinct symbols (free and fixed counted separately).
    pub fn distinct_symbols(&self) -> usize {
        self.distinct
    }

    /// Positions holding fixed letters.
    pub fn fixed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_fixed())
            .map(|(i, _)| i)
    }

    /// Number of distinct free letters.
    pub fn free_letters(&self) -> usize {
        let mut mask = 0u32;
        for s in &self.symbols {
            if let Symbol::Free(c) = s {
                mask |= 1 << (c - b'a');
            }
        }
        mask.count_ones() as usize
    }
}

impl fmt::Display for CipherToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a ciphertext line into tokens, dropping whitespace and punctuation.
pub fn tokens_from_text(text: &str) -> Result<Vec<CipherToken>, TokenError> {
    crate::text::tokenize(text)
        .into_iter()
        .filter(|t| crate::text::is_word_token(t))
        .flat_map(|t| {
            // Word runs may still carry digits or underscores; keep the letters only.
            t.split(|c: char| !c.is_ascii_alphabetic())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|t| CipherToken::parse(&t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_free_and_fixed() {
        let t = CipherToken::parse("abEa").unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(
            t.symbols(),
            &[
                Symbol::Free(b'a'),
                Symbol::Free(b'b'),
                Symbol::Fixed(b'e'),
                Symbol::Free(b'a'),
            ]
        );
        assert_eq!(t.distinct_symbols(), 3);
        assert_eq!(t.free_letters(), 2);
        assert_eq!(t.fixed_positions().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn free_and_fixed_same_letter_are_distinct() {
        let t = CipherToken::parse("eE").unwrap();
        assert_eq!(t.distinct_symbols(), 2);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(CipherToken::parse(""), Err(TokenError::Empty));
    }

    #[test]
    fn parse_rejects_non_letters() {
        let err = CipherToken::parse("ab'c").unwrap_err();
        assert!(matches!(err, TokenError::NonLetter { ch: '\'', .. }));
        assert!(err.to_string().contains("ab'c"));
    }

    #[test]
    fn tokens_from_sentence() {
        let tokens = tokens_from_text("jtx xll, dbavkpsa'q apc.").unwrap();
        let raw: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
        assert_eq!(raw, vec!["jtx", "xll", "dbavkpsa", "q", "apc"]);
    }

    #[test]
    fn tokens_from_blank_text() {
        assert!(tokens_from_text("  ... ").unwrap().is_empty());
    }
}
