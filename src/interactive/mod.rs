//! Interactive TUI front-end

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, game_key, run_tui};
