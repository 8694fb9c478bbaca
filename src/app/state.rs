//! Application state management
//!
//! `App` sits between the terminal and the engine: it routes input, feeds
//! engine events to the presenter and writes the saved record after every
//! action that changed something.

use super::feedback::Feedback;
use super::screen::{Screen, SettingField};
use crate::game::events::dispatch_all;
use crate::game::validation::{classify_key, GuessInput};
use crate::game::{Category, Difficulty, GameEngine, GameEvent};
use crate::storage::{KeyValueStore, PersistenceAdapter, SavedRecord};
use crate::tui::theme;
use tracing::{info, warn};

/// Key that spends a hint
pub const HINT_KEY: char = '?';

/// Player-selected settings, restored from the saved record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub category: Category,
    /// Theme name as stored; may name a theme this build does not know
    pub theme: String,
}

/// Main application state
pub struct App<S: KeyValueStore> {
    /// Whether the application should quit
    pub should_quit: bool,
    engine: GameEngine,
    persistence: PersistenceAdapter<S>,
    settings: Settings,
    feedback: Feedback,
    screen: Screen,
}

impl<S: KeyValueStore> App<S> {
    /// Restore the saved record into `engine`, then start the first round.
    pub fn new(mut engine: GameEngine, persistence: PersistenceAdapter<S>, feedback: Feedback) -> Self {
        let record = persistence.load();
        engine.restore(record.stats(), record.hints_remaining);
        info!(
            wins = record.wins,
            games_played = record.games_played,
            hints_remaining = record.hints_remaining,
            "restored saved record"
        );

        let settings = Settings {
            difficulty: record.difficulty,
            category: record.category,
            theme: record.theme,
        };

        let mut app = App {
            should_quit: false,
            engine,
            persistence,
            settings,
            feedback,
            screen: Screen::Playing,
        };
        app.new_game();
        app
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Handle character input. Letters guess, `?` spends a hint.
    pub fn on_char(&mut self, c: char) {
        if self.screen.is_settings() {
            return;
        }
        if c == HINT_KEY {
            self.use_hint();
            return;
        }
        if let GuessInput::Letter(letter) = classify_key(c) {
            self.guess(letter);
        }
    }

    /// Handle Enter: start a new round with the current settings
    pub fn on_enter(&mut self) {
        if !self.screen.is_settings() {
            self.new_game();
        }
    }

    /// Handle Tab: open or close the settings picker
    pub fn on_tab(&mut self) {
        self.screen = if self.screen.is_settings() {
            Screen::Playing
        } else {
            Screen::settings()
        };
    }

    /// Handle Esc: close the picker, then the end-of-round popup, then quit
    pub fn on_escape(&mut self) {
        if self.screen.is_settings() {
            self.screen = Screen::Playing;
        } else if self.feedback.popup().is_some() {
            self.feedback.dismiss_popup();
        } else {
            self.quit();
        }
    }

    pub fn on_up(&mut self) {
        self.screen.field_up();
    }

    pub fn on_down(&mut self) {
        self.screen.field_down();
    }

    pub fn on_left(&mut self) {
        self.adjust_setting(false);
    }

    pub fn on_right(&mut self) {
        self.adjust_setting(true);
    }

    pub fn guess(&mut self, letter: char) {
        let turn = self.engine.guess(letter);
        self.present(&turn.events);
        if turn.outcome.changed_state() {
            self.save();
        }
    }

    pub fn use_hint(&mut self) {
        let turn = self.engine.use_hint();
        self.present(&turn.events);
        if turn.outcome.changed_state() {
            self.save();
        }
    }

    /// Abandon the current round and start another.
    pub fn new_game(&mut self) {
        let events = self
            .engine
            .start_new_game(self.settings.difficulty, self.settings.category);
        self.present(&events);
        self.save();
    }

    /// Changing difficulty starts a new round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.settings.difficulty != difficulty {
            self.settings.difficulty = difficulty;
            self.new_game();
        }
    }

    /// Changing category starts a new round.
    pub fn set_category(&mut self, category: Category) {
        if self.settings.category != category {
            self.settings.category = category;
            self.new_game();
        }
    }

    /// Changing theme keeps the current round.
    pub fn set_theme(&mut self, name: &str) {
        if self.settings.theme != name {
            self.settings.theme = name.to_string();
            self.save();
        }
    }

    /// Expire notifications and highlights
    pub fn tick(&mut self) {
        self.feedback.tick();
    }

    /// Snapshot of everything that is persisted
    pub fn record(&self) -> SavedRecord {
        let stats = self.engine.stats();
        SavedRecord {
            wins: stats.wins,
            hints_used: stats.hints_used,
            games_played: stats.games_played,
            hints_remaining: self.engine.hints_remaining(),
            theme: self.settings.theme.clone(),
            difficulty: self.settings.difficulty,
            category: self.settings.category,
        }
    }

    fn adjust_setting(&mut self, forward: bool) {
        match self.screen.selected_field() {
            Some(SettingField::Difficulty) => {
                self.set_difficulty(self.settings.difficulty.cycle(forward));
            }
            Some(SettingField::Category) => {
                self.set_category(self.settings.category.cycle(forward));
            }
            Some(SettingField::Theme) => {
                let next = theme::cycle_theme(&self.settings.theme, forward);
                self.set_theme(next);
            }
            None => {}
        }
    }

    fn present(&mut self, events: &[GameEvent]) {
        self.feedback.begin_update();
        dispatch_all(events, &mut self.feedback);
    }

    fn save(&mut self) {
        let record = self.record();
        if let Err(e) = self.persistence.save(&record) {
            warn!(error = %e, "failed to save record");
        }
    }
}
