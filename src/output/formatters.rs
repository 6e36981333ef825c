//! Formatting utilities for terminal output

use crate::core::{CellStatus, Score};
use rustc_hash::FxHashMap;

/// Rows of the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Single-character marker for a cell, used where colour is unavailable
#[must_use]
pub const fn status_marker(status: CellStatus) -> char {
    match status {
        CellStatus::Empty => '·',
        CellStatus::Filled => ' ',
        CellStatus::Correct => 'G',
        CellStatus::Present => 'Y',
        CellStatus::Absent => '-',
    }
}

/// Keyboard rows paired with the hint for each key
#[must_use]
pub fn keyboard_layout(hints: &FxHashMap<char, Score>) -> Vec<Vec<(char, Option<Score>)>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| row.chars().map(|key| (key, hints.get(&key).copied())).collect())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_layout_attaches_hints() {
        let mut hints = FxHashMap::default();
        hints.insert('Q', Score::Absent);
        hints.insert('M', Score::Correct);

        let layout = keyboard_layout(&hints);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[0][0], ('Q', Some(Score::Absent)));
        assert_eq!(layout[0][1], ('W', None));
        assert_eq!(layout[2].last(), Some(&('M', Some(Score::Correct))));
    }

    #[test]
    fn status_markers() {
        assert_eq!(status_marker(CellStatus::Correct), 'G');
        assert_eq!(status_marker(CellStatus::Present), 'Y');
        assert_eq!(status_marker(CellStatus::Absent), '-');
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }
}
