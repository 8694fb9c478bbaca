//! Lifetime statistics
//!
//! Counters only ever grow. They survive across rounds and sessions via the
//! saved record.

/// Player lifetime statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Rounds won
    pub wins: u32,
    /// Hints spent across all rounds
    pub hints_used: u32,
    /// Rounds started (counted at round start, not at round end)
    pub games_played: u32,
}

impl Stats {
    /// Create stats from saved counters
    pub fn new(wins: u32, hints_used: u32, games_played: u32) -> Self {
        Stats {
            wins,
            hints_used,
            games_played,
        }
    }

    pub fn record_game_started(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
    }

    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn record_hint(&mut self) {
        self.hints_used = self.hints_used.saturating_add(1);
    }

    /// Fraction of started rounds that were won
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }

    /// Win rate as a whole percentage for display
    pub fn win_percent(&self) -> u32 {
        (self.win_rate() * 100.0).round().min(100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = Stats::default();
        assert_eq!(stats, Stats::new(0, 0, 0));
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.win_percent(), 0);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = Stats::default();
        stats.record_game_started();
        stats.record_game_started();
        stats.record_win();
        stats.record_hint();

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.hints_used, 1);
        assert_eq!(stats.win_rate(), 0.5);
        assert_eq!(stats.win_percent(), 50);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = Stats::new(u32::MAX, u32::MAX, u32::MAX);
        stats.record_win();
        stats.record_hint();
        stats.record_game_started();
        assert_eq!(stats, Stats::new(u32::MAX, u32::MAX, u32::MAX));
    }

    #[test]
    fn test_win_percent_is_capped() {
        // Saved records can carry more wins than games
        let stats = Stats::new(7, 0, 3);
        assert_eq!(stats.win_percent(), 100);
    }
}
