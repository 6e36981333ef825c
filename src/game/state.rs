//! Game state snapshot

use super::Grid;
use crate::core::{MAX_TRIES, Pattern, Word};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything a front-end needs to draw one game
///
/// Only the controller mutates it; callers get shared references or clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) target: Word,
    pub(crate) status: GameStatus,
}

impl GameState {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            grid: Grid::new(),
            target,
            status: GameStatus::Playing,
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn current_row_index(&self) -> usize {
        self.grid.current_row_index()
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.grid.scored_rows().count()
    }

    /// End-of-game message, `None` while playing
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::GameState;
    ///
    /// let state = GameState::new(Word::new("crane").unwrap());
    /// assert_eq!(state.message(), None);
    /// ```
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some("Congratulations! You won".to_string()),
            GameStatus::Lost => Some(format!("The word was {}.", self.target)),
        }
    }

    /// Spoiler-free summary: a header plus one emoji row per guess
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let tries = match self.status {
            GameStatus::Playing => return None,
            GameStatus::Won => self.guesses_used().to_string(),
            GameStatus::Lost => "X".to_string(),
        };

        let mut text = format!("Wordle {tries}/{MAX_TRIES}\n");
        for row in self.grid.scored_rows() {
            if let Some(scores) = row.scores() {
                let _ = write!(text, "\n{}", Pattern::from_scores(&scores).to_emoji());
            }
        }
        Some(text)
    }
}
