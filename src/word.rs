//! Validated five-letter words.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordleError};
use crate::WORD_LENGTH;

/// A lowercase ASCII word of exactly [`WORD_LENGTH`] letters.
///
/// Stored inline as bytes, so it is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse and normalize a word. Surrounding whitespace is trimmed and
    /// letters are lowercased.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(WordleError::InvalidLength(len));
        }
        let mut bytes = [0u8; WORD_LENGTH];
        for (slot, c) in bytes.iter_mut().zip(s.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordleError::InvalidCharacter(c));
            }
            *slot = c.to_ascii_lowercase() as u8;
        }
        Ok(Self(bytes))
    }

    pub fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII letters in `parse`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Letter index (0 for `a`) at a position.
    #[inline]
    pub fn letter_index(&self, position: usize) -> usize {
        (self.0[position] - b'a') as usize
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
