//! Information-theoretic scoring.
//!
//! A guess partitions the candidates by the feedback each would produce.
//! The more evenly it splits them, the more the feedback tells us, which
//! is measured as the Shannon entropy of the partition sizes.

use crate::feedback::FeedbackPattern;
use crate::word::Word;

/// How many candidates fall into each feedback pattern for `guess`,
/// indexed by [`FeedbackPattern::index`].
pub fn pattern_distribution(
    guess: &Word,
    candidates: &[Word],
) -> [u32; FeedbackPattern::NUM_PATTERNS] {
    let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for answer in candidates {
        counts[FeedbackPattern::simulate(answer, guess).index()] += 1;
    }
    counts
}

/// Expected information, in bits, from guessing `guess`.
///
/// Zero when every candidate yields the same pattern, which includes the
/// one- and zero-candidate cases.
pub fn entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }
    let n = candidates.len() as f64;
    let mut entropy = 0.0;
    for &count in pattern_distribution(guess, candidates).iter() {
        if count > 0 {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }
    }
    entropy.max(0.0)
}

/// Effective number of candidates left after a guess with this entropy.
pub fn expected_remaining(entropy: f64, candidates: usize) -> f64 {
    candidates as f64 / 2f64.powf(entropy)
}
