//! Sound cues
//!
//! A terminal cannot synthesize tones, so the bell stands in for the cues
//! that matter most and the rest play nothing. Playback failures are ignored.

use std::io::{self, Stdout, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Correct,
    Wrong,
    Win,
    Lose,
    Hint,
}

impl Sound {
    /// Cues the terminal bell stands in for
    pub fn rings_bell(&self) -> bool {
        matches!(self, Sound::Wrong | Sound::Win | Sound::Lose)
    }
}

pub trait SoundPlayer {
    fn play(&mut self, sound: Sound);
}

/// Plays nothing. Used when sound is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, _sound: Sound) {}
}

/// Rings the terminal bell (BEL) for the loud cues
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out }
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, sound: Sound) {
        if !sound.rings_bell() {
            return;
        }
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }
}

/// The player for the sound switch
pub fn player(enabled: bool) -> Box<dyn SoundPlayer> {
    if enabled {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Silent)
    }
}
