//! # Wordle AI
//!
//! A Wordle engine with a guess-suggesting solver.
//!
//! Feedback is simulated with the official duplicate-letter rules, the
//! candidate set is narrowed by every observed pattern, and the next guess
//! is picked by one of three strategies: maximum entropy, letter-position
//! frequency, or a weighted hybrid of the two plus overall letter
//! frequency.

pub mod candidates;
pub mod compare;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod game;
pub mod solver;
pub mod stats;
pub mod strategy;
pub mod word;

pub use candidates::{filter_candidates, CandidateSet};
pub use config::SolverConfig;
pub use dictionary::Dictionary;
pub use error::{Result, WordleError};
pub use feedback::{Feedback, FeedbackPattern};
pub use game::{GameSession, GameStatus, GuessAnalysis};
pub use solver::WordleSolver;
pub use stats::GameStats;
pub use strategy::{ScoredGuess, Strategy};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed in one game.
pub const MAX_ATTEMPTS: usize = 6;
