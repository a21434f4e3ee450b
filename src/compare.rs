//! Head-to-head strategy comparison.
//!
//! Every strategy plays the same randomly drawn secrets from scratch. A
//! game is abandoned after [`COMPARISON_GUESS_LIMIT`] guesses and then
//! counts as one more than the limit.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::info;

use crate::config::SolverConfig;
use crate::dictionary::Dictionary;
use crate::error::{Result, WordleError};
use crate::solver::WordleSolver;
use crate::strategy::Strategy;
use crate::word::Word;
use crate::MAX_ATTEMPTS;

pub const COMPARISON_GUESS_LIMIT: usize = 10;

/// Outcome of one strategy over all simulated games.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    pub strategy: Strategy,
    /// Guesses per game, in the order the secrets were drawn.
    pub guesses: Vec<usize>,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    /// Percentage of games solved within [`MAX_ATTEMPTS`].
    pub success_rate: f64,
}

impl StrategySummary {
    pub fn from_guesses(strategy: Strategy, guesses: Vec<usize>) -> Self {
        let n = guesses.len().max(1) as f64;
        let mean = guesses.iter().sum::<usize>() as f64 / n;
        let variance = guesses.iter().map(|&g| (g as f64 - mean).powi(2)).sum::<f64>() / n;

        let mut sorted = guesses.clone();
        sorted.sort_unstable();
        let median = match sorted.len() {
            0 => 0.0,
            len if len % 2 == 1 => sorted[len / 2] as f64,
            len => (sorted[len / 2 - 1] + sorted[len / 2]) as f64 / 2.0,
        };
        let solved = guesses.iter().filter(|&&g| g <= MAX_ATTEMPTS).count();

        Self {
            strategy,
            mean,
            median,
            std_dev: variance.sqrt(),
            min: sorted.first().copied().unwrap_or(0),
            max: sorted.last().copied().unwrap_or(0),
            success_rate: solved as f64 / n * 100.0,
            guesses,
        }
    }
}

/// Draw `games` secrets (with replacement) using a seeded generator.
pub fn draw_secrets(dictionary: &Dictionary, games: usize, seed: u64) -> Result<Vec<Word>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..games)
        .map(|_| dictionary.answers().choose(&mut rng).copied().ok_or(WordleError::NoCandidates))
        .collect()
}

/// Play `secrets` with every strategy.
pub fn compare_strategies(
    dictionary: Arc<Dictionary>,
    config: &SolverConfig,
    secrets: &[Word],
) -> Vec<StrategySummary> {
    Strategy::ALL
        .iter()
        .map(|&strategy| {
            let solver = WordleSolver::new(dictionary.clone(), strategy, config.clone());
            let guesses: Vec<usize> = secrets
                .par_iter()
                .map(|secret| {
                    solver
                        .guesses_needed(secret, COMPARISON_GUESS_LIMIT)
                        .unwrap_or(COMPARISON_GUESS_LIMIT + 1)
                })
                .collect();
            let summary = StrategySummary::from_guesses(strategy, guesses);
            info!(
                %strategy,
                games = secrets.len(),
                mean = summary.mean,
                success_rate = summary.success_rate,
                "strategy evaluated"
            );
            summary
        })
        .collect()
}
