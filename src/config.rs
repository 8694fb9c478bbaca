//! Runtime configuration from environment variables

use crate::game::{EngineConfig, MAX_WRONG_GUESSES};
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "HANGMAN_DATA_DIR";
pub const LOG_VAR: &str = "HANGMAN_LOG";
pub const SOUND_VAR: &str = "HANGMAN_SOUND";
pub const MAX_WRONG_VAR: &str = "HANGMAN_MAX_WRONG";
pub const HINTS_VAR: &str = "HANGMAN_HINTS";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Overrides the OS data directory
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
    pub sound: bool,
    pub engine: EngineConfig,
    /// Variables that were set but could not be used; reported once logging is up
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            sound: true,
            engine: EngineConfig::default(),
            rejected: Vec::new(),
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let mut config = Config::default();

        config.data_dir = var(DATA_DIR_VAR).map(PathBuf::from);

        if let Some(filter) = var(LOG_VAR) {
            config.log_filter = filter;
        }

        if let Some(sound) = var(SOUND_VAR) {
            match sound.to_lowercase().as_str() {
                "off" | "0" | "false" | "no" => config.sound = false,
                "on" | "1" | "true" | "yes" => config.sound = true,
                _ => config.rejected.push(format!("{}={}", SOUND_VAR, sound)),
            }
        }

        if let Some(raw) = var(MAX_WRONG_VAR) {
            match raw.parse::<usize>() {
                Ok(n) => config.engine.max_wrong_guesses = n.clamp(1, MAX_WRONG_GUESSES),
                Err(_) => config.rejected.push(format!("{}={}", MAX_WRONG_VAR, raw)),
            }
        }

        if let Some(raw) = var(HINTS_VAR) {
            match raw.parse::<u32>() {
                Ok(n) => config.engine.initial_hints = n,
                Err(_) => config.rejected.push(format!("{}={}", HINTS_VAR, raw)),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert!(config.sound);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.engine.max_wrong_guesses, 6);
        assert_eq!(config.engine.initial_hints, 3);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            (DATA_DIR_VAR, "/tmp/hangman"),
            (LOG_VAR, "hangman=debug"),
            (SOUND_VAR, "off"),
            (MAX_WRONG_VAR, "4"),
            (HINTS_VAR, "5"),
        ]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/hangman")));
        assert_eq!(config.log_filter, "hangman=debug");
        assert!(!config.sound);
        assert_eq!(config.engine.max_wrong_guesses, 4);
        assert_eq!(config.engine.initial_hints, 5);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn test_sound_switch_spellings() {
        for value in ["off", "0", "FALSE", "no"] {
            assert!(!config_from(&[(SOUND_VAR, value)]).sound, "{}", value);
        }
        for value in ["on", "1", "True"] {
            assert!(config_from(&[(SOUND_VAR, value)]).sound, "{}", value);
        }
    }

    #[test]
    fn test_max_wrong_is_clamped() {
        assert_eq!(config_from(&[(MAX_WRONG_VAR, "0")]).engine.max_wrong_guesses, 1);
        assert_eq!(config_from(&[(MAX_WRONG_VAR, "10")]).engine.max_wrong_guesses, 6);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[
            (SOUND_VAR, "loud"),
            (MAX_WRONG_VAR, "six"),
            (HINTS_VAR, "-1"),
        ]);
        assert!(config.sound);
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(
            config.rejected,
            vec!["HANGMAN_SOUND=loud", "HANGMAN_MAX_WRONG=six", "HANGMAN_HINTS=-1"]
        );
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[(DATA_DIR_VAR, "  "), (LOG_VAR, "")]);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
