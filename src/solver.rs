//! Assistant-mode solver.
//!
//! Tracks the candidates for a game played elsewhere: the caller reports
//! each guess and the feedback it received, and the solver suggests what
//! to play next under the selected [`Strategy`]. It can also play a whole
//! game by itself when the answer is known, which is what the benchmark
//! and strategy comparison are built on.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::candidates::CandidateSet;
use crate::config::SolverConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::feedback::FeedbackPattern;
use crate::strategy::{self, ScoredGuess, Strategy};
use crate::word::Word;
use crate::MAX_ATTEMPTS;

/// A guess and the feedback it got.
pub type Turn = (Word, FeedbackPattern);

#[derive(Debug, Clone)]
pub struct WordleSolver {
    dictionary: Arc<Dictionary>,
    candidates: CandidateSet,
    history: Vec<Turn>,
    strategy: Strategy,
    config: SolverConfig,
}

impl WordleSolver {
    pub fn new(dictionary: Arc<Dictionary>, strategy: Strategy, config: SolverConfig) -> Self {
        Self {
            candidates: CandidateSet::new(dictionary.answers().to_vec()),
            dictionary,
            history: Vec::new(),
            strategy,
            config,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn possible_answers(&self) -> &[Word] {
        self.candidates.words()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn reset(&mut self) {
        self.candidates = CandidateSet::new(self.dictionary.answers().to_vec());
        self.history.clear();
    }

    /// Record feedback observed for `guess`. Returns the new candidate
    /// count; on contradictory feedback nothing changes.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) -> Result<usize> {
        let remaining = self.candidates.apply(guess, pattern)?;
        self.history.push((*guess, pattern));
        Ok(remaining)
    }

    /// Entropy of `guess` against the current candidates.
    pub fn entropy_of(&self, guess: &Word) -> f64 {
        strategy::entropy(guess, self.candidates.words())
    }

    pub fn find_best_guess(&self) -> Result<ScoredGuess> {
        strategy::best_guess(
            self.strategy,
            self.dictionary.allowed(),
            self.candidates.words(),
            &self.config,
        )
    }

    pub fn find_best_guesses(&self, n: usize) -> Result<Vec<ScoredGuess>> {
        let mut ranked = strategy::rank(
            self.strategy,
            self.dictionary.allowed(),
            self.candidates.words(),
            &self.config,
        )?;
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Play until solved or `limit` guesses have been made, asking
    /// `get_feedback` for each guess's pattern. Returns the guesses made.
    pub fn solve_with_feedback<F>(&mut self, limit: usize, mut get_feedback: F) -> Vec<Turn>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut guesses = Vec::new();

        for _ in 0..limit {
            let best = match self.find_best_guess() {
                Ok(g) => g,
                Err(e) => {
                    warn!(error = %e, "solver stopped");
                    break;
                }
            };

            let pattern = get_feedback(&best.word);
            guesses.push((best.word, pattern));

            if pattern.is_win() {
                break;
            }

            if let Err(e) = self.apply_feedback(&best.word, pattern) {
                warn!(error = %e, "solver stopped");
                break;
            }
        }

        guesses
    }

    /// Solve a puzzle knowing the target word, within [`MAX_ATTEMPTS`].
    pub fn solve_for_target(&mut self, target: &Word) -> Vec<Turn> {
        self.solve_within(target, MAX_ATTEMPTS)
    }

    pub fn solve_within(&mut self, target: &Word, limit: usize) -> Vec<Turn> {
        let target = *target;
        let guesses =
            self.solve_with_feedback(limit, |guess| FeedbackPattern::simulate(&target, guess));
        debug!(target = %target, guesses = guesses.len(), "solved");
        guesses
    }

    /// Guesses needed for `target` from a fresh start, or `None` if it was
    /// not solved within `limit`.
    pub fn guesses_needed(&self, target: &Word, limit: usize) -> Option<usize> {
        let mut solver = self.fresh();
        let guesses = solver.solve_within(target, limit);
        match guesses.last() {
            Some((_, pattern)) if pattern.is_win() => Some(guesses.len()),
            _ => None,
        }
    }

    /// Number of guesses per answer, `MAX_ATTEMPTS + 1` for failures,
    /// tallied as `(guesses, count)` in ascending order.
    pub fn benchmark_guess_distribution(&self) -> Vec<(usize, usize)> {
        let guess_counts: Vec<usize> = self
            .dictionary
            .answers()
            .par_iter()
            .map(|target| self.guesses_needed(target, MAX_ATTEMPTS).unwrap_or(MAX_ATTEMPTS + 1))
            .collect();

        let mut distribution = vec![0usize; MAX_ATTEMPTS + 2];
        for count in guess_counts {
            distribution[count] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn benchmark_average_guesses(&self) -> f64 {
        let distribution = self.benchmark_guess_distribution();
        let total: usize = distribution.iter().map(|(_, c)| c).sum();
        let guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
        guesses as f64 / total.max(1) as f64
    }

    fn fresh(&self) -> Self {
        Self::new(self.dictionary.clone(), self.strategy, self.config.clone())
    }
}
