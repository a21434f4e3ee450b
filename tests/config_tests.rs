use std::io::Write as _;
use std::sync::Mutex;

use wordle_ai::config::{HybridWeights, THREADS_ENV};
use wordle_ai::{Dictionary, SolverConfig, Strategy, Word, WordleError};

// Tests that call `SolverConfig::load` read the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_default_config() {
    let config = SolverConfig::default();
    assert_eq!(config.strategy, Strategy::Entropy);
    assert!(config.allow_non_candidates);
    assert_eq!(config.entropy_pool_limit, 3000);
    assert_eq!(config.hybrid_pool_limit, 2000);
    assert_eq!(config.duplicate_letter_penalty, 0.5);
    assert_eq!(config.weights, HybridWeights { entropy: 0.60, position: 0.25, frequency: 0.15 });
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(SolverConfig::from_toml_str("").unwrap(), SolverConfig::default());
}

#[test]
fn test_partial_toml() {
    let config = SolverConfig::from_toml_str(
        r#"
        strategy = "position"
        allow_non_candidates = false
        duplicate_letter_penalty = 1.0

        [weights]
        entropy = 1.0
        "#,
    )
    .unwrap();

    assert_eq!(config.strategy, Strategy::Position);
    assert!(!config.allow_non_candidates);
    assert_eq!(config.duplicate_letter_penalty, 1.0);
    assert_eq!(config.weights.entropy, 1.0);
    assert_eq!(config.weights.position, 0.25);
    assert_eq!(config.entropy_pool_limit, 3000);
}

#[test]
fn test_invalid_config_values() {
    for text in [
        "duplicate_letter_penalty = 1.5",
        "[weights]\nentropy = -1.0",
        "[weights]\nentropy = 0.0\nposition = 0.0\nfrequency = 0.0",
        "threads = 0",
        "strategy = \"random\"",
        "entropy_pool_limit = \"many\"",
    ] {
        assert!(
            matches!(SolverConfig::from_toml_str(text), Err(WordleError::Config(_))),
            "accepted {text:?}"
        );
    }
}

#[test]
fn test_load_from_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hybrid_pool_limit = 50").unwrap();

    let config = SolverConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.hybrid_pool_limit, 50);
}

#[test]
fn test_threads_env_override() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    std::env::set_var(THREADS_ENV, "3");
    let config = SolverConfig::load(None);
    std::env::set_var(THREADS_ENV, "four");
    let garbage = SolverConfig::load(None);
    std::env::set_var(THREADS_ENV, "0");
    let zero = SolverConfig::load(None);
    std::env::remove_var(THREADS_ENV);
    let unset = SolverConfig::load(None);

    assert_eq!(config.unwrap().threads, Some(3));
    match garbage {
        Err(WordleError::Config(message)) => assert!(message.contains("four"), "{message}"),
        other => panic!("expected a config error, got {other:?}"),
    }
    assert!(matches!(zero, Err(WordleError::Config(_))));
    assert_eq!(unset.unwrap().threads, None);
}

#[test]
fn test_embedded_dictionary() {
    let dictionary = Dictionary::embedded().unwrap();

    assert!(dictionary.answers().len() > 400);
    assert!(dictionary.allowed().len() >= dictionary.answers().len());
    assert!(dictionary.answers().windows(2).all(|p| p[0] < p[1]));
    assert!(dictionary.allowed().windows(2).all(|p| p[0] < p[1]));
    assert!(dictionary.answers().iter().all(|w| dictionary.is_allowed(w)));
}

#[test]
fn test_dictionary_normalizes_and_merges() {
    let dictionary = Dictionary::from_text("Crane\ncrane slate", "aback").unwrap();

    assert_eq!(dictionary.answers().len(), 2);
    assert_eq!(dictionary.allowed().len(), 3);
    assert!(dictionary.is_allowed(&Word::parse("aback").unwrap()));
    assert!(!dictionary.is_answer(&Word::parse("aback").unwrap()));
}

#[test]
fn test_dictionary_rejects_bad_words() {
    assert!(matches!(Dictionary::from_text("crane unfold", ""), Err(WordleError::Dictionary(_))));
    assert!(matches!(Dictionary::from_text("", "crane"), Err(WordleError::Dictionary(_))));
}

#[test]
fn test_dictionary_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.txt");
    let allowed = dir.path().join("allowed.txt");
    std::fs::write(&answers, "crane\nslate\n").unwrap();
    std::fs::write(&allowed, "aback\n").unwrap();

    let dictionary = Dictionary::from_files(&answers, &allowed).unwrap();
    assert_eq!(dictionary.allowed().len(), 3);

    let missing = Dictionary::from_files(&dir.path().join("nope.txt"), &allowed);
    assert!(matches!(missing, Err(WordleError::Io(_))));
}
