use wordle_ai::config::HybridWeights;
use wordle_ai::strategy::{
    self, entropy, expected_remaining, guess_pool, pattern_distribution, LetterCounts,
    PositionFrequencies, ScoredGuess,
};
use wordle_ai::{Dictionary, SolverConfig, Strategy, Word, WordleError};

const TEN: &str = "crane slate trace crate raise arise stare roast toast beast";

fn rank_all(
    strategy: Strategy,
    dictionary: &Dictionary,
    config: &SolverConfig,
) -> Vec<ScoredGuess> {
    strategy::rank(strategy, dictionary.allowed(), dictionary.answers(), config).unwrap()
}

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn words(s: &str) -> Vec<Word> {
    s.split_whitespace().map(w).collect()
}

#[test]
fn test_entropy_zero_for_single_candidate() {
    assert_eq!(entropy(&w("crane"), &words("slate")), 0.0);
    assert_eq!(entropy(&w("crane"), &[]), 0.0);
}

#[test]
fn test_entropy_zero_when_all_patterns_match() {
    // No candidate shares a letter with the guess.
    let candidates = words("crane slate trace");
    assert_eq!(entropy(&w("pudgy"), &candidates), 0.0);
}

#[test]
fn test_entropy_of_even_split() {
    let candidates = words("crane crate");
    assert!((entropy(&w("crane"), &candidates) - 1.0).abs() < 1e-12);
}

#[test]
fn test_pattern_distribution_sums_to_candidates() {
    let candidates = words("crane slate trace crate raise arise stare roast toast beast");
    let distribution = pattern_distribution(&w("arise"), &candidates);
    assert_eq!(distribution.iter().sum::<u32>(), 10);
}

#[test]
fn test_expected_remaining() {
    assert_eq!(expected_remaining(0.0, 8), 8.0);
    assert_eq!(expected_remaining(3.0, 8), 1.0);
}

#[test]
fn test_position_frequencies() {
    let frequencies = PositionFrequencies::from_candidates(&words("crane crate trace"));

    assert!((frequencies.get(b'c', 0) - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(frequencies.get(b'r', 1), 1.0);
    assert_eq!(frequencies.get(b'z', 4), 0.0);
    for row in frequencies.rows() {
        assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_position_duplicate_penalty() {
    let frequencies = PositionFrequencies::from_candidates(&words("geese"));

    assert_eq!(frequencies.score(&w("geese"), 1.0), 5.0);
    assert_eq!(frequencies.score(&w("geese"), 0.5), 4.0);
    assert_eq!(frequencies.score(&w("geese"), 0.0), 3.0);
}

#[test]
fn test_letter_counts_use_distinct_letters() {
    let counts = LetterCounts::from_candidates(&words("geese crane"));

    assert_eq!(counts.get(b'e'), 4);
    assert_eq!(counts.score(&w("eerie")), 5.0);
}

#[test]
fn test_position_ranking_tie_breaks() {
    let dictionary = Dictionary::from_text("crane crate trace", "crace").unwrap();
    let config = SolverConfig {
        duplicate_letter_penalty: 1.0,
        ..SolverConfig::default()
    };

    let ranked = rank_all(Strategy::Position, &dictionary, &config);
    let order: Vec<&str> = ranked.iter().map(|g| g.word.as_str()).collect();

    // crane, crate and crace all score 4.0: candidates first, then alphabetical.
    assert_eq!(order, ["crane", "crate", "crace", "trace"]);
    assert_eq!(ranked[0].score, ranked[2].score);
    assert!(!ranked[2].is_candidate);
}

#[test]
fn test_entropy_ranking_is_deterministic() {
    let dictionary = Dictionary::from_text(TEN, "").unwrap();
    let config = SolverConfig::default();

    let first = rank_all(Strategy::Entropy, &dictionary, &config);
    let second = rank_all(Strategy::Entropy, &dictionary, &config);

    assert_eq!(first, second);
    // Three words split all ten candidates apart; alphabetical order decides.
    let top: Vec<&str> = first.iter().take(3).map(|g| g.word.as_str()).collect();
    assert_eq!(top, ["crane", "crate", "trace"]);
    assert!((first[0].score - 10f64.log2()).abs() < 1e-12);
}

#[test]
fn test_rank_empty_candidates() {
    let allowed = words("crane");
    let result = strategy::rank(Strategy::Hybrid, &allowed, &[], &SolverConfig::default());
    assert!(matches!(result, Err(WordleError::NoCandidates)));
}

#[test]
fn test_guess_pool_sizes() {
    let allowed = words("aback abase abate crane crate trace slate");
    let candidates = words("crane crate trace");
    let config = SolverConfig {
        entropy_pool_limit: 2,
        hybrid_pool_limit: 3,
        ..SolverConfig::default()
    };

    assert_eq!(guess_pool(Strategy::Entropy, &allowed, &candidates, &config).len(), 5);
    assert_eq!(guess_pool(Strategy::Hybrid, &allowed, &candidates, &config).len(), 6);
    assert_eq!(guess_pool(Strategy::Position, &allowed, &candidates, &config).len(), 7);

    let candidates_only = SolverConfig {
        allow_non_candidates: false,
        ..config
    };
    assert_eq!(guess_pool(Strategy::Entropy, &allowed, &candidates, &candidates_only), candidates);
}

#[test]
fn test_guess_pool_small_candidate_set() {
    let allowed = words("aback abase abate crane crate");
    let candidates = words("crate crane");
    for strategy in Strategy::ALL {
        let pool = guess_pool(strategy, &allowed, &candidates, &SolverConfig::default());
        assert_eq!(pool, candidates);
    }
}

#[test]
fn test_hybrid_components_are_normalized() {
    let dictionary = Dictionary::from_text(TEN, "").unwrap();
    let ranked = rank_all(Strategy::Hybrid, &dictionary, &SolverConfig::default());

    let breakdowns: Vec<_> = ranked.iter().map(|g| g.breakdown.unwrap()).collect();
    for b in &breakdowns {
        for component in [b.entropy, b.position, b.frequency] {
            assert!((0.0..=1.0).contains(&component));
        }
    }
    let max = |f: fn(&strategy::HybridBreakdown) -> f64| {
        breakdowns.iter().map(f).fold(0.0, f64::max)
    };
    assert_eq!(max(|b| b.entropy), 1.0);
    assert_eq!(max(|b| b.position), 1.0);
    assert_eq!(max(|b| b.frequency), 1.0);

    for guess in &ranked {
        let b = guess.breakdown.unwrap();
        let expected = 0.60 * b.entropy + 0.25 * b.position + 0.15 * b.frequency;
        assert!((guess.score - expected).abs() < 1e-12);
    }
}

#[test]
fn test_hybrid_with_entropy_weight_only() {
    let dictionary = Dictionary::from_text(TEN, "").unwrap();
    let config = SolverConfig {
        weights: HybridWeights {
            entropy: 1.0,
            position: 0.0,
            frequency: 0.0,
        },
        ..SolverConfig::default()
    };
    let candidates = dictionary.answers();

    let ranked = rank_all(Strategy::Hybrid, &dictionary, &config);
    let max_entropy = entropy(&w("crane"), candidates);

    for guess in &ranked {
        let expected = entropy(&guess.word, candidates) / max_entropy;
        assert!((guess.score - expected).abs() < 1e-12);
    }
}

#[test]
fn test_strategy_names() {
    assert_eq!(Strategy::default(), Strategy::Entropy);
    assert_eq!(Strategy::Hybrid.to_string(), "Hybrid");
    assert_eq!(Strategy::ALL.len(), 3);
}
