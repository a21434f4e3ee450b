//! Solver configuration.
//!
//! Read from an optional TOML file; every field has a default so an empty
//! file (or no file) is valid. `WORDLE_AI_THREADS` overrides `threads`.
//!
//! ```toml
//! strategy = "hybrid"
//! allow_non_candidates = true
//! entropy_pool_limit = 3000
//! hybrid_pool_limit = 2000
//! duplicate_letter_penalty = 0.5
//! threads = 4
//!
//! [weights]
//! entropy = 0.60
//! position = 0.25
//! frequency = 0.15
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, WordleError};
use crate::strategy::Strategy;

/// Environment variable overriding [`SolverConfig::threads`].
pub const THREADS_ENV: &str = "WORDLE_AI_THREADS";

/// Hybrid scorer component weights.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HybridWeights {
    pub entropy: f64,
    pub position: f64,
    pub frequency: f64,
}

impl Default for HybridWeights {
    fn default() -> Self {
        Self {
            entropy: 0.60,
            position: 0.25,
            frequency: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Strategy used when none is picked on the command line.
    pub strategy: Strategy,
    /// Let the entropy strategy suggest words that cannot be the answer.
    pub allow_non_candidates: bool,
    /// How many allowed words (in dictionary order) the entropy strategy
    /// evaluates on top of the remaining candidates.
    pub entropy_pool_limit: usize,
    /// How many allowed words the hybrid strategy evaluates.
    pub hybrid_pool_limit: usize,
    /// How many allowed words the position strategy evaluates.
    pub position_pool_limit: Option<usize>,
    /// Multiplier for the second and later occurrence of a letter in a
    /// guess under the position score. 1.0 disables the penalty.
    pub duplicate_letter_penalty: f64,
    pub weights: HybridWeights,
    /// Rayon worker threads. `None` keeps rayon's default.
    pub threads: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Entropy,
            allow_non_candidates: true,
            entropy_pool_limit: 3000,
            hybrid_pool_limit: 2000,
            position_pool_limit: None,
            duplicate_letter_penalty: 0.5,
            weights: HybridWeights::default(),
            threads: None,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| WordleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults, then apply the
    /// environment override. A set but unparsable override is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_str(&fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        if let Ok(value) = std::env::var(THREADS_ENV) {
            let threads = value.trim().parse().map_err(|_| {
                WordleError::Config(format!("{THREADS_ENV}={value:?} is not a thread count"))
            })?;
            config.threads = Some(threads);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let HybridWeights {
            entropy,
            position,
            frequency,
        } = self.weights;
        if [entropy, position, frequency].iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(WordleError::Config("hybrid weights must be non-negative".to_string()));
        }
        if entropy + position + frequency == 0.0 {
            return Err(WordleError::Config("hybrid weights must not all be zero".to_string()));
        }
        if !(0.0..=1.0).contains(&self.duplicate_letter_penalty) {
            return Err(WordleError::Config(
                "duplicate_letter_penalty must be between 0 and 1".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(WordleError::Config("threads must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Size rayon's global pool. Tolerates a pool that is already built.
    pub fn init_threads(&self) {
        if let Some(threads) = self.threads {
            if rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .is_err()
            {
                tracing::warn!(threads, "rayon thread pool already initialized");
            }
        }
    }
}
