//! Engine notifications and the presentation callback interface
//!
//! Every engine operation returns the events it produced. Events are built
//! only after the round and counters are fully updated, so a presenter that
//! looks back at the engine while handling one sees post-transition state.

use super::{Category, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        word_length: usize,
        category: Category,
        difficulty: Difficulty,
    },
    /// Emitted for every revealed letter after a reveal, in reveal order.
    /// `fresh` marks the letter revealed by this update.
    LetterRevealed {
        letter: char,
        fresh: bool,
    },
    WrongGuess {
        letter: char,
        wrong_count: usize,
        max_wrong: usize,
    },
    Won {
        word: String,
        wins: u32,
    },
    Lost {
        word: String,
        wins: u32,
    },
    HintUsed {
        letter: char,
        hints_remaining: u32,
    },
    RepeatGuess {
        letter: char,
    },
    NoHintsLeft,
}

impl GameEvent {
    /// Forward this event to the matching presenter callback.
    pub fn dispatch(&self, presenter: &mut dyn Presenter) {
        match self {
            GameEvent::RoundStarted {
                word_length,
                category,
                difficulty,
            } => presenter.on_round_start(*word_length, *category, *difficulty),
            GameEvent::LetterRevealed { letter, fresh } => {
                presenter.on_letter_revealed(*letter, *fresh)
            }
            GameEvent::WrongGuess {
                letter,
                wrong_count,
                max_wrong,
            } => presenter.on_wrong_guess(*letter, *wrong_count, *max_wrong),
            GameEvent::Won { word, wins } => presenter.on_win(word, *wins),
            GameEvent::Lost { word, wins } => presenter.on_lose(word, *wins),
            GameEvent::HintUsed {
                letter,
                hints_remaining,
            } => presenter.on_hint_used(*letter, *hints_remaining),
            GameEvent::RepeatGuess { letter } => presenter.on_repeat_guess(*letter),
            GameEvent::NoHintsLeft => presenter.on_no_hints_left(),
        }
    }
}

/// Dispatch a batch of events in order.
pub fn dispatch_all(events: &[GameEvent], presenter: &mut dyn Presenter) {
    for event in events {
        event.dispatch(presenter);
    }
}

/// Receiver of engine events. All callbacks default to doing nothing.
pub trait Presenter {
    fn on_round_start(&mut self, _word_length: usize, _category: Category, _difficulty: Difficulty) {}
    fn on_letter_revealed(&mut self, _letter: char, _fresh: bool) {}
    fn on_wrong_guess(&mut self, _letter: char, _wrong_count: usize, _max_wrong: usize) {}
    fn on_win(&mut self, _word: &str, _wins: u32) {}
    fn on_lose(&mut self, _word: &str, _wins: u32) {}
    fn on_hint_used(&mut self, _letter: char, _hints_remaining: u32) {}
    fn on_repeat_guess(&mut self, _letter: char) {}
    fn on_no_hints_left(&mut self) {}
}
