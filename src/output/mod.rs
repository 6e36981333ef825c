//! Terminal output formatting
//!
//! Display utilities for the line-based mode and shared helpers for the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_score, print_statistics};
