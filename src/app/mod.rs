//! Application state and core logic

pub mod feedback;
pub mod screen;
pub mod state;

pub use feedback::{Feedback, NoticeKind};
pub use screen::SettingField;
pub use state::App;
