use proptest::prelude::*;
use wordle_ai::strategy::{entropy, pattern_distribution};
use wordle_ai::{filter_candidates, Feedback, FeedbackPattern, Word};

fn word() -> impl Strategy<Value = Word> {
    // A small alphabet makes repeated letters common.
    "[a-f]{5}".prop_map(|s| Word::parse(&s).unwrap())
}

fn count(word: &Word, letter: u8) -> usize {
    word.bytes().iter().filter(|&&b| b == letter).count()
}

proptest! {
    #[test]
    fn marks_never_exceed_target_count(target in word(), guess in word()) {
        let feedbacks = FeedbackPattern::simulate(&target, &guess).to_feedbacks();
        for &letter in guess.bytes() {
            let marked = guess
                .bytes()
                .iter()
                .zip(feedbacks)
                .filter(|&(&b, fb)| b == letter && fb != Feedback::Absent)
                .count();
            prop_assert!(marked <= count(&target, letter));
        }
    }

    #[test]
    fn marks_match_min_of_counts(target in word(), guess in word()) {
        let feedbacks = FeedbackPattern::simulate(&target, &guess).to_feedbacks();
        for letter in b'a'..=b'f' {
            let marked = guess
                .bytes()
                .iter()
                .zip(feedbacks)
                .filter(|&(&b, fb)| b == letter && fb != Feedback::Absent)
                .count();
            prop_assert_eq!(marked, count(&target, letter).min(count(&guess, letter)));
        }
    }

    #[test]
    fn guessing_the_target_wins(target in word()) {
        prop_assert!(FeedbackPattern::simulate(&target, &target).is_win());
    }

    #[test]
    fn filter_is_idempotent_and_never_grows(
        candidates in prop::collection::vec(word(), 0..40),
        guess in word(),
        target in word(),
    ) {
        let pattern = FeedbackPattern::simulate(&target, &guess);
        let once = filter_candidates(&candidates, &guess, pattern);
        let twice = filter_candidates(&once, &guess, pattern);

        prop_assert!(once.len() <= candidates.len());
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn entropy_is_zero_iff_one_pattern_class(
        candidates in prop::collection::vec(word(), 1..40),
        guess in word(),
    ) {
        let h = entropy(&guess, &candidates);
        let classes = pattern_distribution(&guess, &candidates).iter().filter(|&&c| c > 0).count();

        prop_assert!(h >= 0.0);
        prop_assert!(h <= (candidates.len() as f64).log2() + 1e-9);
        prop_assert_eq!(h == 0.0, classes == 1);
    }
}
