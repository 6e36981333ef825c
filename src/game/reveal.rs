//! Timed reveal of a freshly scored row
//!
//! Scores are final before a schedule is created; the schedule only decides
//! how many cells of the row are shown as scored at a given instant. Steps are
//! due strictly left to right, one `delay` apart. Time is always passed in by
//! the caller, so nothing here sleeps or reads the clock.

use crate::core::WORD_LENGTH;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// One pending reveal: the cell at `col` becomes visible at `due`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub col: usize,
    pub due: Instant,
}

/// Queue of reveal steps for one row
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    row: usize,
    revealed: usize,
    pending: VecDeque<RevealStep>,
}

impl RevealSchedule {
    /// Schedule the cells of `row`, the first one `delay` after `start`
    ///
    /// # Examples
    /// ```
    /// use std::time::{Duration, Instant};
    /// use wordle_game::game::RevealSchedule;
    ///
    /// let start = Instant::now();
    /// let mut reveal = RevealSchedule::new(0, start, Duration::from_millis(100));
    /// assert_eq!(reveal.advance(start + Duration::from_millis(250)), 2);
    /// assert!(!reveal.is_complete());
    /// ```
    #[must_use]
    pub fn new(row: usize, start: Instant, delay: Duration) -> Self {
        let pending = (0..WORD_LENGTH)
            .map(|col| RevealStep {
                col,
                due: start + delay * (col as u32 + 1),
            })
            .collect();
        Self {
            row,
            revealed: 0,
            pending,
        }
    }

    /// A schedule with every cell already visible
    #[must_use]
    pub fn completed(row: usize) -> Self {
        Self {
            row,
            revealed: WORD_LENGTH,
            pending: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Cells visible so far (a prefix of the row)
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// When the next cell is due, if any
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.front().map(|step| step.due)
    }

    /// Run every step due at `now`; returns how many cells became visible
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(step) = self.pending.front() {
            if step.due > now {
                break;
            }
            self.revealed = step.col + 1;
            self.pending.pop_front();
            fired += 1;
        }
        fired
    }

    /// Reveal all remaining cells at once
    pub fn finish(&mut self) {
        self.pending.clear();
        self.revealed = WORD_LENGTH;
    }

    /// Whether cell `col` of `row` is visible yet
    #[must_use]
    pub fn is_visible(&self, row: usize, col: usize) -> bool {
        row != self.row || col < self.revealed
    }
}
