//! Weighted blend of entropy, position and letter-frequency scores.
//!
//! The three raw scores live on different scales (bits, summed shares,
//! raw letter counts), so each is divided by its maximum over the pool
//! before weighting. The best word in every component scores 1.0.

use rayon::prelude::*;

use super::entropy::entropy;
use super::position::PositionFrequencies;
use crate::config::SolverConfig;
use crate::word::Word;

/// Normalized component scores of one guess, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HybridBreakdown {
    pub entropy: f64,
    pub position: f64,
    pub frequency: f64,
}

/// Total occurrences of each letter across all candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts([u32; 26]);

impl LetterCounts {
    pub fn from_candidates(candidates: &[Word]) -> Self {
        let mut counts = [0u32; 26];
        for word in candidates {
            for &b in word.bytes() {
                counts[(b - b'a') as usize] += 1;
            }
        }
        Self(counts)
    }

    pub fn get(&self, letter: u8) -> u32 {
        self.0[(letter - b'a') as usize]
    }

    /// Sum of counts over the distinct letters of `word`.
    pub fn score(&self, word: &Word) -> f64 {
        let mut seen = [false; 26];
        let mut total = 0u32;
        for &b in word.bytes() {
            let idx = (b - b'a') as usize;
            if !seen[idx] {
                seen[idx] = true;
                total += self.0[idx];
            }
        }
        total as f64
    }
}

/// Score every word in `pool`, returning `(word, combined, breakdown)`
/// in pool order.
pub fn score_pool(
    pool: &[Word],
    candidates: &[Word],
    config: &SolverConfig,
) -> Vec<(Word, f64, HybridBreakdown)> {
    let positions = PositionFrequencies::from_candidates(candidates);
    let letters = LetterCounts::from_candidates(candidates);

    let raw: Vec<HybridBreakdown> = pool
        .par_iter()
        .map(|word| HybridBreakdown {
            entropy: entropy(word, candidates),
            position: positions.score(word, config.duplicate_letter_penalty),
            frequency: letters.score(word),
        })
        .collect();

    let max_entropy = max_of(raw.iter().map(|b| b.entropy));
    let max_position = max_of(raw.iter().map(|b| b.position));
    let max_frequency = max_of(raw.iter().map(|b| b.frequency));
    let weights = config.weights;

    pool.iter()
        .zip(raw)
        .map(|(word, b)| {
            let normalized = HybridBreakdown {
                entropy: normalize(b.entropy, max_entropy),
                position: normalize(b.position, max_position),
                frequency: normalize(b.frequency, max_frequency),
            };
            let combined = weights.entropy * normalized.entropy
                + weights.position * normalized.position
                + weights.frequency * normalized.frequency;
            (*word, combined, normalized)
        })
        .collect()
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

/// A component whose maximum is zero carries no signal and stays zero.
fn normalize(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}
