//! Hangman - guess the word before the figure is complete
//!
//! Local-first terminal word game. Stats, hints and settings persist
//! between sessions.

mod app;
mod config;
mod game;
mod stats;
mod storage;
mod tui;

use anyhow::{Context, Result};
use app::{App, Feedback};
use config::{Config, DEFAULT_LOG_FILTER};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game::{Clock, GameEngine, RngSource, SystemClock, WordBank};
use std::fs::{self, File};
use std::path::Path;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;
use storage::{KeyValueStore, MemoryStore, PersistenceAdapter, SavedRecord, Storage};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tui::Tui;

const LOG_FILE_NAME: &str = "hangman.log";

/// Input poll timeout; also the rate at which timed feedback expires
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = Config::from_env();
    let data_dir = config
        .data_dir
        .clone()
        .or_else(|| Storage::default_data_dir().ok());

    if let Some(dir) = &data_dir {
        init_logging(dir, &config.log_filter);
    }
    for rejected in &config.rejected {
        warn!(setting = %rejected, "ignoring unusable setting, using default");
    }

    let defaults = SavedRecord {
        hints_remaining: config.engine.initial_hints,
        ..SavedRecord::default()
    };
    let persistence = PersistenceAdapter::with_defaults(open_store(data_dir.as_deref()), defaults);

    let clock: Rc<dyn Clock> = Rc::new(SystemClock);
    let bank = WordBank::standard().context("built-in word lists are unusable")?;
    let engine = GameEngine::new(
        bank,
        Box::new(RngSource::thread()),
        clock.clone(),
        config.engine,
    );
    let feedback = Feedback::new(clock, tui::sound::player(config.sound));
    let mut app = App::new(engine, persistence, feedback);

    // Initialize terminal
    let mut terminal = Tui::new().context("failed to open terminal")?;
    terminal.enter().context("failed to set up terminal")?;

    let result = run(&mut terminal, &mut app);

    terminal.exit().context("failed to restore terminal")?;
    let stats = app.engine().stats();
    info!(wins = stats.wins, games_played = stats.games_played, "session ended");
    result
}

/// Main event loop
fn run<S: KeyValueStore>(terminal: &mut Tui, app: &mut App<S>) -> Result<()> {
    loop {
        terminal.draw(|frame| tui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.quit();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.on_escape(),
        KeyCode::Enter => app.on_enter(),
        KeyCode::Tab => app.on_tab(),
        KeyCode::Up => app.on_up(),
        KeyCode::Down => app.on_down(),
        KeyCode::Left => app.on_left(),
        KeyCode::Right => app.on_right(),
        KeyCode::Char(c) => app.on_char(c),
        _ => {}
    }
}

/// Log to a file in the data directory. The terminal belongs to the UI, so
/// without a writable log file nothing is logged.
fn init_logging(dir: &Path, filter: &str) {
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = File::options()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Open the save file, or keep progress in memory if that fails.
fn open_store(data_dir: Option<&Path>) -> Box<dyn KeyValueStore> {
    let Some(dir) = data_dir else {
        warn!("no data directory, progress will not be saved");
        return Box::new(MemoryStore::new());
    };

    match Storage::open(dir) {
        Ok(storage) => {
            info!(path = %dir.display(), "opened save file");
            Box::new(storage)
        }
        Err(e) => {
            warn!(error = %e, "could not open save file, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}
