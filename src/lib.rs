//! Wordle Game
//!
//! A terminal Wordle clone built around a pure grid state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use wordle_game::game::{GameController, GameStatus, Key};
//! use wordle_game::wordlists::WordList;
//! use wordle_game::GameConfig;
//!
//! let words = WordList::from_words(["crane"], Some(7)).unwrap();
//! let mut game = GameController::new(words, GameConfig::default());
//! let now = Instant::now();
//!
//! for c in "crane".chars() {
//!     game.handle_key(Key::Letter(c), now);
//! }
//! game.handle_key(Key::Enter, now);
//! assert_eq!(game.state().status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Grid model and state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

mod config;
mod error;

pub use config::{DEFAULT_REVEAL_DELAY, GameConfig};
pub use error::{GameError, WordError};
