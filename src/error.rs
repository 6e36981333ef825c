//! Error types
//!
//! User input never produces an error: invalid keys are ignored and bounded
//! operations degrade to no-ops. The variants here cover caller bugs and
//! resource problems only.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Errors raised by the game core and the dictionary
#[derive(Debug, Error)]
pub enum GameError {
    /// A caller broke a precondition, e.g. scored words of different lengths.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("word list {0} contains no valid words")]
    EmptyWordList(String),

    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GameError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }
}
