//! Game logic: difficulty profiles, categories, word selection, rounds

pub mod engine;
pub mod events;
pub mod validation;
pub mod words;

pub use engine::{GameEngine, GameStatus, KeyState, RoundState};
pub use events::{GameEvent, Presenter};
pub use words::WordBank;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of gallows parts; one is drawn per wrong guess.
pub const MAX_WRONG_GUESSES: usize = 6;

/// Hint budget granted on first run. It is not replenished between rounds.
pub const DEFAULT_HINTS: u32 = 3;

/// Word-length bounds for a difficulty level (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub min_length: usize,
    pub max_length: usize,
}

impl DifficultyProfile {
    /// Check whether a word of `len` letters fits this profile.
    pub fn contains(&self, len: usize) -> bool {
        len >= self.min_length && len <= self.max_length
    }
}

/// Difficulty level selected by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Get all difficulty levels in order
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Stored name, as used in the saved record
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Get the display label for this level
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Length bounds gating word selection
    pub fn profile(&self) -> DifficultyProfile {
        let (min_length, max_length) = match self {
            Difficulty::Easy => (4, 5),
            Difficulty::Medium => (6, 7),
            Difficulty::Hard => (8, 9),
            Difficulty::Expert => (10, 30),
        };
        DifficultyProfile {
            min_length,
            max_length,
        }
    }

    pub fn cycle(&self, forward: bool) -> Self {
        cycle(Self::all(), *self, forward)
    }
}

/// Word category selected by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Animals,
    Countries,
    Programming,
    Science,
    Food,
}

impl Category {
    /// Get all categories in order
    pub fn all() -> &'static [Category] {
        &[
            Category::All,
            Category::Animals,
            Category::Countries,
            Category::Programming,
            Category::Science,
            Category::Food,
        ]
    }

    /// Stored name, as used in the saved record
    pub fn name(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Animals => "animals",
            Category::Countries => "countries",
            Category::Programming => "programming",
            Category::Science => "science",
            Category::Food => "food",
        }
    }

    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Words",
            Category::Animals => "Animals",
            Category::Countries => "Countries",
            Category::Programming => "Programming",
            Category::Science => "Science",
            Category::Food => "Food",
        }
    }

    pub fn cycle(&self, forward: bool) -> Self {
        cycle(Self::all(), *self, forward)
    }
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, forward: bool) -> T {
    let len = items.len();
    let index = items.iter().position(|item| *item == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    items[next]
}

/// Engine tunables. Owned by the engine rather than derived from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Wrong guesses tolerated before the round is lost
    pub max_wrong_guesses: usize,
    /// Hint budget used when no saved budget exists
    pub initial_hints: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: MAX_WRONG_GUESSES,
            initial_hints: DEFAULT_HINTS,
        }
    }
}

/// Uniform random choice over a candidate set.
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    /// Random source backed by the thread-local generator
    pub fn thread() -> Self {
        RngSource(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Millisecond wall clock
pub trait Clock {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_profiles() {
        assert_eq!(Difficulty::Easy.profile(), DifficultyProfile { min_length: 4, max_length: 5 });
        assert_eq!(Difficulty::Medium.profile(), DifficultyProfile { min_length: 6, max_length: 7 });
        assert_eq!(Difficulty::Hard.profile(), DifficultyProfile { min_length: 8, max_length: 9 });
        assert_eq!(Difficulty::Expert.profile(), DifficultyProfile { min_length: 10, max_length: 30 });
    }

    #[test]
    fn test_profile_bounds_are_inclusive() {
        let profile = Difficulty::Easy.profile();
        assert!(!profile.contains(3));
        assert!(profile.contains(4));
        assert!(profile.contains(5));
        assert!(!profile.contains(6));
    }

    #[test]
    fn test_names_match_serde() {
        for d in Difficulty::all() {
            assert_eq!(serde_json::to_string(d).unwrap(), format!("\"{}\"", d.name()));
        }
        for c in Category::all() {
            assert_eq!(serde_json::to_string(c).unwrap(), format!("\"{}\"", c.name()));
        }
        assert!(serde_json::from_str::<Difficulty>("\"insane\"").is_err());
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(Difficulty::Expert.cycle(true), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.cycle(false), Difficulty::Expert);
        assert_eq!(Category::All.cycle(true), Category::Animals);
        assert_eq!(Category::All.cycle(false), Category::Food);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Expert).unwrap(), "\"expert\"");
        assert_eq!(
            serde_json::from_str::<Category>("\"programming\"").unwrap(),
            Category::Programming
        );
    }

    #[test]
    fn test_rng_source_stays_in_range() {
        use rand::SeedableRng;

        let mut source = RngSource(rand::rngs::StdRng::seed_from_u64(42));
        for len in 1..50 {
            assert!(source.pick_index(len) < len);
        }
    }

    #[test]
    fn test_default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_wrong_guesses, 6);
        assert_eq!(config.initial_hints, 3);
    }
}
