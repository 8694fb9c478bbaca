//! The saved stats-and-settings record
//!
//! One JSON object under a fixed key. Loading never fails: a missing or
//! unreadable record yields defaults, and each known field is read on its
//! own so one bad field does not discard the rest. Unknown fields are
//! ignored.

use super::{KeyValueStore, StorageError};
use crate::game::{Category, Difficulty, DEFAULT_HINTS};
use crate::stats::Stats;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Key of the single saved slot
pub const STATS_KEY: &str = "hangmanStats";

/// Theme used when none has been chosen
pub const DEFAULT_THEME: &str = "dark";

/// Stats, hint budget and last-selected settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub wins: u32,
    pub hints_used: u32,
    pub games_played: u32,
    pub hints_remaining: u32,
    pub theme: String,
    pub difficulty: Difficulty,
    pub category: Category,
}

impl Default for SavedRecord {
    fn default() -> Self {
        SavedRecord {
            wins: 0,
            hints_used: 0,
            games_played: 0,
            hints_remaining: DEFAULT_HINTS,
            theme: DEFAULT_THEME.to_string(),
            difficulty: Difficulty::default(),
            category: Category::default(),
        }
    }
}

impl SavedRecord {
    /// Parse stored text over `base`. Returns `None` if the text is not a
    /// JSON object.
    pub fn parse_over(base: &SavedRecord, text: &str) -> Option<SavedRecord> {
        let value: Value = serde_json::from_str(text).ok()?;
        let fields = value.as_object()?;
        let mut record = base.clone();
        record.merge(fields);
        Some(record)
    }

    /// Serialize to the stored JSON form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn stats(&self) -> Stats {
        Stats::new(self.wins, self.hints_used, self.games_played)
    }

    fn merge(&mut self, fields: &Map<String, Value>) {
        merge_field(fields, "wins", &mut self.wins);
        merge_field(fields, "hintsUsed", &mut self.hints_used);
        merge_field(fields, "gamesPlayed", &mut self.games_played);
        merge_field(fields, "hintsRemaining", &mut self.hints_remaining);
        merge_field(fields, "difficulty", &mut self.difficulty);
        merge_field(fields, "category", &mut self.category);

        let mut theme = String::new();
        merge_field(fields, "theme", &mut theme);
        if !theme.is_empty() {
            self.theme = theme;
        }
    }
}

/// Overwrite `slot` with `fields[key]` if present and well-typed.
fn merge_field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str, slot: &mut T) {
    let Some(value) = fields.get(key) else {
        return;
    };
    match T::deserialize(value) {
        Ok(parsed) => *slot = parsed,
        Err(e) => debug!(key, error = %e, "ignoring saved field"),
    }
}

/// Loads and saves the record through a [`KeyValueStore`].
pub struct PersistenceAdapter<S: KeyValueStore> {
    store: S,
    defaults: SavedRecord,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    #[cfg(test)]
    pub fn new(store: S) -> Self {
        Self::with_defaults(store, SavedRecord::default())
    }

    /// Use `defaults` for anything the stored record does not provide
    pub fn with_defaults(store: S, defaults: SavedRecord) -> Self {
        PersistenceAdapter { store, defaults }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the saved record merged over defaults.
    pub fn load(&self) -> SavedRecord {
        let text = match self.store.get(STATS_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return self.defaults.clone(),
            Err(e) => {
                warn!(error = %e, "could not read saved record, using defaults");
                return self.defaults.clone();
            }
        };

        match SavedRecord::parse_over(&self.defaults, &text) {
            Some(record) => record,
            None => {
                warn!("saved record is corrupt, using defaults");
                self.defaults.clone()
            }
        }
    }

    /// Write the record to the slot, replacing what was there.
    pub fn save(&mut self, record: &SavedRecord) -> Result<(), StorageError> {
        let text = record.to_json()?;
        self.store.set(STATS_KEY, &text)
    }
}
