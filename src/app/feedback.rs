//! Transient presentation state driven by engine events
//!
//! Notifications auto-hide, the end-of-round popup appears after a short
//! delay, and letters revealed by the latest action glow briefly. All
//! timing comes from the shared clock so the UI only has to ask "is this
//! visible now?".

use crate::game::{Category, Clock, Difficulty, Presenter};
use crate::tui::sound::{Sound, SoundPlayer};
use std::rc::Rc;

pub const NOTIFICATION_MILLIS: u64 = 1800;
pub const WIN_POPUP_DELAY_MILLIS: u64 = 800;
pub const LOSS_POPUP_DELAY_MILLIS: u64 = 900;
pub const FRESH_HIGHLIGHT_MILLIS: u64 = 900;

pub const REPEAT_GUESS_MESSAGE: &str = "You already tried this letter!";
pub const NO_HINTS_MESSAGE: &str = "No hints left!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
    Hint,
}

impl NoticeKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Warning => "!",
            NoticeKind::Error => "x",
            NoticeKind::Hint => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: u64,
}

impl Notification {
    pub fn is_visible(&self, now: u64) -> bool {
        now.saturating_sub(self.shown_at) < NOTIFICATION_MILLIS
    }
}

/// End-of-round summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub won: bool,
    pub word: String,
    pub wins: u32,
    visible_at: u64,
}

impl Popup {
    pub fn is_visible(&self, now: u64) -> bool {
        now >= self.visible_at
    }

    pub fn title(&self) -> &'static str {
        if self.won {
            "Congratulations! You Won!"
        } else {
            "Game Over! Better luck next time!"
        }
    }

    pub fn reveal_line(&self) -> String {
        format!("The word was: {}", self.word)
    }
}

/// Presenter that turns engine events into sounds, notices and highlights.
pub struct Feedback {
    clock: Rc<dyn Clock>,
    sound: Box<dyn SoundPlayer>,
    notification: Option<Notification>,
    popup: Option<Popup>,
    fresh: Vec<char>,
    fresh_at: u64,
    hinted: Option<char>,
}

impl Feedback {
    pub fn new(clock: Rc<dyn Clock>, sound: Box<dyn SoundPlayer>) -> Self {
        Feedback {
            clock,
            sound,
            notification: None,
            popup: None,
            fresh: Vec::new(),
            fresh_at: 0,
            hinted: None,
        }
    }

    /// Reset per-action state. Call before presenting an action's events.
    pub fn begin_update(&mut self) {
        self.fresh.clear();
        self.hinted = None;
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.notification = Some(Notification {
            message: message.into(),
            kind,
            shown_at: self.clock.now_millis(),
        });
    }

    /// Drop anything that has expired
    pub fn tick(&mut self) {
        let now = self.clock.now_millis();
        if self.notification.as_ref().is_some_and(|n| !n.is_visible(now)) {
            self.notification = None;
        }
        if !self.fresh.is_empty() && now.saturating_sub(self.fresh_at) >= FRESH_HIGHLIGHT_MILLIS {
            self.fresh.clear();
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        let now = self.clock.now_millis();
        self.notification.as_ref().filter(|n| n.is_visible(now))
    }

    /// The popup once its delay has passed
    pub fn popup(&self) -> Option<&Popup> {
        let now = self.clock.now_millis();
        self.popup.as_ref().filter(|p| p.is_visible(now))
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }

    /// Whether `letter` was revealed by the latest action
    pub fn is_fresh(&self, letter: char) -> bool {
        self.fresh.contains(&letter)
    }

    fn show_popup(&mut self, won: bool, word: &str, wins: u32) {
        let delay = if won {
            WIN_POPUP_DELAY_MILLIS
        } else {
            LOSS_POPUP_DELAY_MILLIS
        };
        self.popup = Some(Popup {
            won,
            word: word.to_string(),
            wins,
            visible_at: self.clock.now_millis() + delay,
        });
    }
}

impl Presenter for Feedback {
    fn on_round_start(&mut self, _word_length: usize, _category: Category, _difficulty: Difficulty) {
        self.popup = None;
        self.fresh.clear();
    }

    fn on_letter_revealed(&mut self, letter: char, fresh: bool) {
        if !fresh {
            return;
        }
        self.fresh.push(letter);
        self.fresh_at = self.clock.now_millis();
        // Hinted letters already played the hint cue
        if self.hinted != Some(letter) {
            self.sound.play(Sound::Correct);
        }
    }

    fn on_wrong_guess(&mut self, _letter: char, _wrong_count: usize, _max_wrong: usize) {
        self.sound.play(Sound::Wrong);
    }

    fn on_win(&mut self, word: &str, wins: u32) {
        self.sound.play(Sound::Win);
        self.show_popup(true, word, wins);
    }

    fn on_lose(&mut self, word: &str, wins: u32) {
        self.sound.play(Sound::Lose);
        self.show_popup(false, word, wins);
    }

    fn on_hint_used(&mut self, letter: char, _hints_remaining: u32) {
        self.hinted = Some(letter);
        self.sound.play(Sound::Hint);
        self.notify(format!("Hint: {}", letter.to_ascii_uppercase()), NoticeKind::Hint);
    }

    fn on_repeat_guess(&mut self, _letter: char) {
        self.notify(REPEAT_GUESS_MESSAGE, NoticeKind::Warning);
    }

    fn on_no_hints_left(&mut self) {
        self.notify(NO_HINTS_MESSAGE, NoticeKind::Error);
    }
}
