//! Partial substitution alphabets built up one cipher token at a time.

use std::fmt::{self, Debug, Formatter};

use crate::token::{CipherToken, Symbol};

/// What produces a plain letter in the encoder direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A free cipher letter decodes to it.
    Cipher(u8),
    /// A fixed token letter pins it to itself.
    Fixed,
}

/// A decoder (cipher -> plain) and encoder (plain -> cipher) kept as mutual
/// inverses: `decoder[c] == Some(p)` iff `encoder[p] == Some(Source::Cipher(c))`.
///
/// The map is `Copy`; search branches take their own copy instead of sharing
/// one mutable map.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    decoder: [Option<u8>; 26],
    encoder: [Option<Source>; 26],
}

fn idx(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain letter for cipher letter `c`, if assigned.
    pub fn decode_letter(&self, c: u8) -> Option<u8> {
        if c.is_ascii_lowercase() {
            self.decoder[idx(c)]
        } else {
            None
        }
    }

    /// What currently produces plain letter `p`, if anything.
    pub fn source_of(&self, p: u8) -> Option<Source> {
        if p.is_ascii_lowercase() {
            self.encoder[idx(p)]
        } else {
            None
        }
    }

    /// Number of cipher letters with an assigned plain letter.
    pub fn len(&self) -> usize {
        self.decoder.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.encoder.iter().all(Option::is_none)
    }

    /// Try to absorb `token` decoded as `word`.
    ///
    /// Returns `false` on the first conflict: a cipher letter already mapped
    /// elsewhere, a plain letter already produced by another cipher letter, or
    /// a plain letter pinned by a fixed letter. On `false` the map is left
    /// unchanged; on `true` it holds the union of old and new pairs.
    pub fn extend(&mut self, token: &CipherToken, word: &str) -> bool {
        let plain = word.as_bytes();
        if plain.len() != token.len() || !plain.iter().all(u8::is_ascii_lowercase) {
            return false;
        }

        let mut next = *self;
        for (&sym, &p) in token.symbols().iter().zip(plain) {
            let slot = &mut next.encoder[idx(p)];
            match sym {
                Symbol::Free(c) => {
                    if matches!(next.decoder[idx(c)], Some(q) if q != p) {
                        return false;
                    }
                    match *slot {
                        None => *slot = Some(Source::Cipher(c)),
                        Some(Source::Cipher(d)) if d == c => {}
                        Some(_) => return false,
                    }
                    next.decoder[idx(c)] = Some(p);
                }
                Symbol::Fixed(f) => {
                    if f != p {
                        return false;
                    }
                    match *slot {
                        None => *slot = Some(Source::Fixed),
                        Some(Source::Fixed) => {}
                        Some(Source::Cipher(_)) => return false,
                    }
                }
            }
        }
        *self = next;
        true
    }

    /// Decode one character: mapped cipher letters become their plain
    /// letter, unmapped ones `_`, uppercase (fixed) letters and everything
    /// else are kept.
    pub fn decode_char(&self, c: char) -> char {
        if c.is_ascii_lowercase() {
            self.decoder[idx(c as u8)].map(char::from).unwrap_or('_')
        } else {
            c
        }
    }

    pub fn decode(&self, text: &str) -> String {
        text.chars().map(|c| self.decode_char(c)).collect()
    }
}

impl Debug for SubstitutionMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in b'a'..=b'z' {
            write!(f, "{}", c as char)?;
        }
        writeln!(f)?;
        for d in self.decoder.iter() {
            match d {
                Some(p) => write!(f, "{}", *p as char)?,
                None => write!(f, "?")?,
            }
        }
        writeln!(f)
    }
}
