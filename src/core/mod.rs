//! Core domain types for Wordle
//!
//! Pure, synchronous building blocks: validated words, per-letter scores and
//! the evaluator. Nothing here depends on time, I/O or randomness.

mod evaluator;
mod pattern;
mod score;
mod word;

pub use evaluator::{score, score_words};
pub use pattern::Pattern;
pub use score::{CellStatus, Score};
pub use word::Word;

/// Letters per word and cells per row
pub const WORD_LENGTH: usize = 5;

/// Rows in the grid
pub const MAX_TRIES: usize = 6;
