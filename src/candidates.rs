//! Candidate filtering.

use tracing::debug;

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackPattern;
use crate::word::Word;

/// Keep exactly the words that would have produced `pattern` for `guess`.
///
/// Order is preserved, so filtering a sorted list yields a sorted list.
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    pattern: FeedbackPattern,
) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| FeedbackPattern::simulate(word, guess) == pattern)
        .copied()
        .collect()
}

/// The words still consistent with every piece of feedback seen in a game.
///
/// Starts as the full answer list and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Narrow the set by an observed `(guess, pattern)` and return the new
    /// size.
    ///
    /// If no word survives, the set is left as it was and
    /// [`WordleError::InconsistentFeedback`] is returned.
    pub fn apply(&mut self, guess: &Word, pattern: FeedbackPattern) -> Result<usize> {
        let narrowed = filter_candidates(&self.words, guess, pattern);
        if narrowed.is_empty() {
            return Err(WordleError::InconsistentFeedback {
                guess: guess.to_string(),
                pattern: pattern.to_letters(),
            });
        }
        debug!(
            guess = %guess,
            pattern = %pattern.to_letters(),
            before = self.words.len(),
            after = narrowed.len(),
            "filtered candidates"
        );
        self.words = narrowed;
        Ok(self.words.len())
    }
}
