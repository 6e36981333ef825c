//! Guess grid
//!
//! A fixed 6×5 table of cells. Filled cells in a row always form a contiguous
//! prefix; rows before the current one are scored, rows after it are empty.
//! Out-of-bounds operations are silent no-ops because they come from ordinary
//! key presses.

use crate::core::{CellStatus, MAX_TRIES, Score, WORD_LENGTH};

/// One letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: CellStatus,
}

/// One guess attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Number of letters entered so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().take_while(|c| c.letter.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == WORD_LENGTH
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.cells.iter().all(|c| c.status.is_scored())
    }

    /// Letters of the row, in order
    #[must_use]
    pub fn word(&self) -> String {
        self.cells.iter().map_while(|c| c.letter).collect()
    }

    /// Scores of a scored row
    #[must_use]
    pub fn scores(&self) -> Option<[Score; WORD_LENGTH]> {
        let mut scores = [Score::Absent; WORD_LENGTH];
        for (slot, cell) in scores.iter_mut().zip(&self.cells) {
            *slot = cell.status.score()?;
        }
        Some(scores)
    }

    fn push(&mut self, letter: char) -> bool {
        if self.is_scored() || !letter.is_ascii_alphabetic() {
            return false;
        }
        let Some(cell) = self.cells.iter_mut().find(|c| c.letter.is_none()) else {
            return false;
        };
        *cell = Cell {
            letter: Some(letter.to_ascii_uppercase()),
            status: CellStatus::Filled,
        };
        true
    }

    fn pop(&mut self) -> bool {
        if self.is_scored() {
            return false;
        }
        match self.cells.iter_mut().rev().find(|c| c.letter.is_some()) {
            Some(cell) => {
                *cell = Cell::default();
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, scores: &[Score; WORD_LENGTH]) {
        for (cell, &score) in self.cells.iter_mut().zip(scores) {
            cell.status = score.into();
        }
    }
}

/// The full board plus the index of the row being typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: [Row; MAX_TRIES],
    current: usize,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_TRIES] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    #[must_use]
    pub const fn current_row_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.get(self.current)
    }

    /// Append a letter to the current row
    ///
    /// Returns `false` without changing anything if the row is full, already
    /// scored, or the character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Grid;
    ///
    /// let mut grid = Grid::new();
    /// assert!(grid.add_letter('c'));
    /// assert!(!grid.add_letter('3'));
    /// assert_eq!(grid.current_word(), "C");
    /// ```
    pub fn add_letter(&mut self, letter: char) -> bool {
        self.rows
            .get_mut(self.current)
            .is_some_and(|row| row.push(letter))
    }

    /// Clear the last filled cell of the current row
    pub fn remove_last_letter(&mut self) -> bool {
        self.rows.get_mut(self.current).is_some_and(Row::pop)
    }

    /// Letters typed into the current row, possibly fewer than five
    #[must_use]
    pub fn current_word(&self) -> String {
        self.current_row().map(Row::word).unwrap_or_default()
    }

    /// Write scores into the current row, locking its cells
    pub fn score_current_row(&mut self, scores: &[Score; WORD_LENGTH]) {
        if let Some(row) = self.rows.get_mut(self.current) {
            row.apply(scores);
        }
    }

    /// Move on to the next row; `false` when the grid is exhausted
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < MAX_TRIES {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Scored rows in order
    pub fn scored_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_scored())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
