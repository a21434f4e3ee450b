//! Answer and guess word lists.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, WordleError};
use crate::word::Word;

const ANSWERS: &str = include_str!("../dictionary/answers.txt");
const ALLOWED: &str = include_str!("../dictionary/allowed.txt");

/// The two static word lists a game is played with.
///
/// `answers` holds the words a secret can be drawn from; `allowed` holds
/// every accepted guess and always includes all answers. Both lists are
/// sorted and free of duplicates.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: Vec<Word>,
}

impl Dictionary {
    /// The lists compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_text(ANSWERS, ALLOWED)
    }

    /// Parse whitespace-separated word lists.
    pub fn from_text(answers: &str, allowed: &str) -> Result<Self> {
        Self::from_words(answers.split_whitespace(), allowed.split_whitespace())
    }

    /// Read word lists from files, one or more words per line.
    pub fn from_files(answers: &Path, allowed: &Path) -> Result<Self> {
        let answers_text = fs::read_to_string(answers)?;
        let allowed_text = fs::read_to_string(allowed)?;
        let dictionary = Self::from_text(&answers_text, &allowed_text)?;
        info!(
            answers = dictionary.answers.len(),
            allowed = dictionary.allowed.len(),
            path = %answers.display(),
            "loaded dictionary from files"
        );
        Ok(dictionary)
    }

    pub fn from_words<'a, A, G>(answers: A, allowed: G) -> Result<Self>
    where
        A: IntoIterator<Item = &'a str>,
        G: IntoIterator<Item = &'a str>,
    {
        let answers = parse_list(answers)?;
        if answers.is_empty() {
            return Err(WordleError::Dictionary("answer list is empty".to_string()));
        }
        let mut allowed = parse_list(allowed)?;
        allowed.extend(answers.iter().copied());

        Ok(Self {
            answers: answers.into_iter().collect(),
            allowed: allowed.into_iter().collect(),
        })
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.binary_search(word).is_ok()
    }

    pub fn is_answer(&self, word: &Word) -> bool {
        self.answers.binary_search(word).is_ok()
    }
}

fn parse_list<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<BTreeSet<Word>> {
    words
        .into_iter()
        .map(|w| Word::parse(w).map_err(|e| WordleError::Dictionary(format!("{w:?}: {e}"))))
        .collect()
}
