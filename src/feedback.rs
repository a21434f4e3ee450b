//! Feedback simulation for Wordle guesses.
//!
//! Computes the green/yellow/gray pattern a guess receives against a
//! target word, following the official duplicate-letter rules.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordleError};
use crate::word::Word;
use crate::WORD_LENGTH;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word, or all of its occurrences already accounted for (gray)
    Absent,
}

impl Feedback {
    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Single-letter form used on the command line: `g`, `y` or `b`.
    pub fn to_letter(self) -> char {
        match self {
            Feedback::Correct => 'g',
            Feedback::Present => 'y',
            Feedback::Absent => 'b',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }
}

/// A complete feedback pattern for a guess.
///
/// Encoded as a single base-3 number, `p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4`
/// with 0 = absent, 1 = present, 2 = correct, so every pattern fits in a
/// `u8` and can index a fixed-size histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// All correct (winning): digit 2 in every position, `3^5 - 1`.
    pub const ALL_CORRECT: Self = Self(242);

    /// 3^5
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut code = 0u8;
        let mut multiplier = 1u8;
        for fb in feedbacks {
            code += fb.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(code)
    }

    /// Rebuild a pattern from its histogram index. `None` if out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::NUM_PATTERNS).then_some(Self(index as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Simulate the feedback `guess` receives when the answer is `target`.
    ///
    /// Greens are assigned first and consume their letter from the
    /// target's multiset; the remaining positions are then scanned left
    /// to right and only turn yellow while unconsumed copies remain.
    pub fn simulate(target: &Word, guess: &Word) -> Self {
        let guess = guess.bytes();
        let target = target.bytes();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut target_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                feedback[i] = Feedback::Correct;
            } else {
                target_remaining[(target[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = (guess[i] - b'a') as usize;
                if target_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    target_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut code = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match code % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            code /= 3;
        }
        feedbacks
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like `"gybbb"` or `"21000"`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(WordleError::InvalidLength(len));
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, c) in feedbacks.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_char(c)
                .ok_or_else(|| WordleError::InvalidPattern(s.to_string()))?;
        }
        Ok(Self::new(feedbacks))
    }

    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_emoji()).collect()
    }

    /// `gyb` letter form, round-trips through [`FeedbackPattern::parse`].
    pub fn to_letters(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_letter()).collect()
    }
}

impl FromStr for FeedbackPattern {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
