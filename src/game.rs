//! A single game against a secret word.
//!
//! The session owns everything that changes while a game is played: the
//! guess history with per-guess analysis, the shrinking candidate set and
//! the keyboard colouring. It is passed around by `&mut`, one per game.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::candidates::CandidateSet;
use crate::config::SolverConfig;
use crate::dictionary::Dictionary;
use crate::error::{Result, WordleError};
use crate::feedback::{Feedback, FeedbackPattern};
use crate::stats::GameStats;
use crate::strategy::{self, ScoredGuess, Strategy};
use crate::word::Word;
use crate::MAX_ATTEMPTS;

/// What a submitted guess told us.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub pattern: FeedbackPattern,
    /// Entropy of the guess against the full answer list, in bits.
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_remaining: usize,
    /// `log2(before) - log2(max(after, 1))`.
    pub information_gain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { guesses: usize },
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    secret: Word,
    candidates: CandidateSet,
    history: Vec<GuessAnalysis>,
    keyboard: [Option<Feedback>; 26],
    status: GameStatus,
}

impl GameSession {
    /// Start a game with a chosen secret, which must be in the answer list.
    pub fn new(dictionary: Arc<Dictionary>, secret: Word) -> Result<Self> {
        if !dictionary.is_answer(&secret) {
            return Err(WordleError::NotInWordList(secret.to_string()));
        }
        Ok(Self {
            candidates: CandidateSet::new(dictionary.answers().to_vec()),
            dictionary,
            secret,
            history: Vec::new(),
            keyboard: [None; 26],
            status: GameStatus::InProgress,
        })
    }

    /// Start a game with a secret drawn uniformly from the answer list.
    pub fn random<R: Rng + ?Sized>(dictionary: Arc<Dictionary>, rng: &mut R) -> Result<Self> {
        let secret = *dictionary.answers().choose(rng).ok_or(WordleError::NoCandidates)?;
        Self::new(dictionary, secret)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[GuessAnalysis] {
        &self.history
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// 1-based number of the next attempt.
    pub fn attempt(&self) -> usize {
        self.history.len() + 1
    }

    /// The secret, only revealed once the game is over.
    pub fn revealed_secret(&self) -> Option<Word> {
        self.status.is_over().then_some(self.secret)
    }

    /// Best feedback seen so far for a letter: green beats yellow beats gray.
    pub fn key_state(&self, letter: u8) -> Option<Feedback> {
        if letter.is_ascii_lowercase() {
            self.keyboard[(letter - b'a') as usize]
        } else {
            None
        }
    }

    /// Validate and play a guess.
    pub fn submit_guess(&mut self, input: &str) -> Result<&GuessAnalysis> {
        if self.status.is_over() {
            return Err(WordleError::GameOver);
        }
        let guess = Word::parse(input)?;
        if !self.dictionary.is_allowed(&guess) {
            return Err(WordleError::NotInWordList(guess.to_string()));
        }

        let pattern = FeedbackPattern::simulate(&self.secret, &guess);
        let before = self.candidates.len();
        let after = self.candidates.apply(&guess, pattern)?;
        let analysis = GuessAnalysis {
            word: guess,
            pattern,
            entropy: strategy::entropy(&guess, self.dictionary.answers()),
            candidates_before: before,
            candidates_remaining: after,
            information_gain: (before as f64).log2() - (after.max(1) as f64).log2(),
        };

        self.update_keyboard(&guess, pattern);
        self.history.push(analysis);

        if pattern.is_win() {
            self.status = GameStatus::Won {
                guesses: self.history.len(),
            };
            info!(secret = %self.secret, guesses = self.history.len(), "game won");
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            info!(secret = %self.secret, "game lost");
        }

        Ok(&self.history[self.history.len() - 1])
    }

    /// Suggestions for the next guess under `strategy`.
    pub fn hint(
        &self,
        strategy: Strategy,
        config: &SolverConfig,
        n: usize,
    ) -> Result<Vec<ScoredGuess>> {
        if self.status.is_over() {
            return Err(WordleError::GameOver);
        }
        let mut ranked = strategy::rank(
            strategy,
            self.dictionary.allowed(),
            self.candidates.words(),
            config,
        )?;
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Add a finished game to `stats`. No-op while the game is running.
    pub fn record(&self, stats: &mut GameStats) {
        match self.status {
            GameStatus::Won { guesses } => stats.record_win(guesses),
            GameStatus::Lost => stats.record_loss(),
            GameStatus::InProgress => {}
        }
    }

    fn update_keyboard(&mut self, guess: &Word, pattern: FeedbackPattern) {
        for (&letter, feedback) in guess.bytes().iter().zip(pattern.to_feedbacks()) {
            let key = &mut self.keyboard[(letter - b'a') as usize];
            *key = match (*key, feedback) {
                (_, Feedback::Correct) | (Some(Feedback::Correct), _) => Some(Feedback::Correct),
                (_, Feedback::Present) | (Some(Feedback::Present), _) => Some(Feedback::Present),
                _ => Some(Feedback::Absent),
            };
        }
    }
}
