//! Terminal UI components using ratatui

pub mod sound;
mod terminal;
pub mod theme;
mod ui;

pub use terminal::Tui;
pub use ui::render;
