//! Game configuration
//!
//! Built from command-line flags in `main`; the library only sees the
//! resolved values.

use std::time::Duration;

/// Default pause between revealing two cells of a scored row
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause between revealing consecutive cells; zero reveals instantly
    pub reveal_delay: Duration,
    /// Reject full rows whose word is not in the dictionary
    pub require_known_word: bool,
    /// Seed for target selection, random when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            require_known_word: false,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_known_words_only(mut self, strict: bool) -> Self {
        self.require_known_word = strict;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
