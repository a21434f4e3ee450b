//! Guess-scoring strategies.
//!
//! Each strategy scores every word in a guess pool against the current
//! candidate set; [`rank`] dispatches on the closed [`Strategy`] enum and
//! returns the pool sorted best-first.
//!
//! Ranking order is fixed: higher score first, then words that are still
//! possible answers, then alphabetical. Scoring runs on rayon's pool but
//! the final sort makes the result independent of scheduling.

pub mod entropy;
pub mod hybrid;
pub mod position;

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use rayon::prelude::*;
use serde::Deserialize;
use tracing::debug;

use crate::config::SolverConfig;
use crate::error::{Result, WordleError};
use crate::word::Word;

pub use entropy::{entropy, expected_remaining, pattern_distribution};
pub use hybrid::{HybridBreakdown, LetterCounts};
pub use position::PositionFrequencies;

/// Which heuristic picks the next guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Maximize Shannon entropy of the feedback distribution.
    #[default]
    Entropy,
    /// Maximize summed letter-per-position frequency.
    Position,
    /// Weighted blend of entropy, position and letter frequency.
    Hybrid,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Entropy, Strategy::Position, Strategy::Hybrid];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Entropy => "Entropy",
            Strategy::Position => "Position",
            Strategy::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate guess with its score under one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    /// Bits for entropy, summed frequency for position, weighted blend of
    /// normalized components for hybrid.
    pub score: f64,
    /// Whether the guess could itself be the answer.
    pub is_candidate: bool,
    /// Normalized components, hybrid only.
    pub breakdown: Option<HybridBreakdown>,
}

impl ScoredGuess {
    fn ranking(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.is_candidate.cmp(&self.is_candidate))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Build the set of words a strategy evaluates.
///
/// With two or fewer candidates only the candidates are considered.
/// Otherwise the pool is the remaining candidates plus a prefix of the
/// allowed list whose length depends on the strategy.
pub fn guess_pool(
    strategy: Strategy,
    allowed: &[Word],
    candidates: &[Word],
    config: &SolverConfig,
) -> Vec<Word> {
    if candidates.len() <= 2 {
        return candidates.to_vec();
    }
    let extra = match strategy {
        Strategy::Entropy if config.allow_non_candidates => config.entropy_pool_limit,
        Strategy::Entropy => 0,
        Strategy::Position => config.position_pool_limit.unwrap_or(allowed.len()),
        Strategy::Hybrid => config.hybrid_pool_limit,
    };
    let pool: BTreeSet<Word> = candidates
        .iter()
        .chain(allowed.iter().take(extra))
        .copied()
        .collect();
    pool.into_iter().collect()
}

/// Score and sort the guess pool for `strategy`, best first.
pub fn rank(
    strategy: Strategy,
    allowed: &[Word],
    candidates: &[Word],
    config: &SolverConfig,
) -> Result<Vec<ScoredGuess>> {
    if candidates.is_empty() {
        return Err(WordleError::NoCandidates);
    }
    let pool = guess_pool(strategy, allowed, candidates, config);
    let remaining: HashSet<Word> = candidates.iter().copied().collect();

    let mut scored: Vec<ScoredGuess> = match strategy {
        Strategy::Entropy => pool
            .par_iter()
            .map(|word| ScoredGuess {
                word: *word,
                score: entropy(word, candidates),
                is_candidate: remaining.contains(word),
                breakdown: None,
            })
            .collect(),
        Strategy::Position => {
            let frequencies = PositionFrequencies::from_candidates(candidates);
            pool.par_iter()
                .map(|word| ScoredGuess {
                    word: *word,
                    score: frequencies.score(word, config.duplicate_letter_penalty),
                    is_candidate: remaining.contains(word),
                    breakdown: None,
                })
                .collect()
        }
        Strategy::Hybrid => hybrid::score_pool(&pool, candidates, config)
            .into_iter()
            .map(|(word, score, breakdown)| ScoredGuess {
                word,
                score,
                is_candidate: remaining.contains(&word),
                breakdown: Some(breakdown),
            })
            .collect(),
    };

    scored.sort_by(ScoredGuess::ranking);
    debug!(
        %strategy,
        pool = pool.len(),
        candidates = candidates.len(),
        best = %scored[0].word,
        "ranked guesses"
    );
    Ok(scored)
}

/// The single best guess for `strategy`.
pub fn best_guess(
    strategy: Strategy,
    allowed: &[Word],
    candidates: &[Word],
    config: &SolverConfig,
) -> Result<ScoredGuess> {
    rank(strategy, allowed, candidates, config)?
        .into_iter()
        .next()
        .ok_or(WordleError::NoCandidates)
}
