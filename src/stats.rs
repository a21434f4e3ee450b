//! Player statistics across games.

use crate::MAX_ATTEMPTS;

/// Running totals for a player.
///
/// `distribution[i]` counts wins in `i + 1` guesses; the last slot counts
/// losses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub distribution: [u32; MAX_ATTEMPTS + 1],
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            distribution: [0; MAX_ATTEMPTS + 1],
        }
    }
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win in `guesses` attempts.
    ///
    /// # Panics
    ///
    /// If `guesses` is not in `1..=MAX_ATTEMPTS`.
    pub fn record_win(&mut self, guesses: usize) {
        assert!(
            (1..=MAX_ATTEMPTS).contains(&guesses),
            "a win takes 1 to {MAX_ATTEMPTS} guesses, got {guesses}"
        );
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        self.distribution[guesses - 1] += 1;
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
        self.distribution[MAX_ATTEMPTS] += 1;
    }

    pub fn losses(&self) -> u32 {
        self.distribution[MAX_ATTEMPTS]
    }

    /// Percentage of games won, 0 when nothing has been played.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.games_played as f64 * 100.0
    }

    /// Mean guesses over won games.
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            return 0.0;
        }
        let total: u32 = self.distribution[..MAX_ATTEMPTS]
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u32 + 1) * count)
            .sum();
        total as f64 / self.games_won as f64
    }
}
