//! Coloured printing for the line-based front-end

use super::formatters::{create_progress_bar, keyboard_layout, status_marker};
use crate::core::{CellStatus, Score, WORD_LENGTH};
use crate::game::{Dictionary, GameController, Statistics};
use colored::{ColoredString, Colorize};

fn tile(letter: char, status: CellStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        CellStatus::Correct => text.black().on_green().bold(),
        CellStatus::Present => text.black().on_yellow().bold(),
        CellStatus::Absent => text.white().on_bright_black(),
        CellStatus::Filled | CellStatus::Empty => text.bold(),
    }
}

fn key(letter: char, hint: Option<Score>) -> ColoredString {
    let text = letter.to_string();
    match hint {
        Some(Score::Correct) => text.green().bold(),
        Some(Score::Present) => text.yellow().bold(),
        Some(Score::Absent) => text.bright_black(),
        None => text.white(),
    }
}

/// Print every row that has been typed or scored
pub fn print_board<D: Dictionary>(game: &GameController<D>) {
    let grid = game.state().grid();
    for (row_index, row) in grid.rows().iter().enumerate() {
        if row.is_empty() && row_index > grid.current_row_index() {
            break;
        }
        let line: Vec<String> = row
            .cells()
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let status = game.visible_status(row_index, col);
                tile(cell.letter.unwrap_or('_'), status).to_string()
            })
            .collect();
        println!("  {}", line.join(" "));
    }
}

/// Print the keyboard coloured by the best score seen for each letter
pub fn print_keyboard<D: Dictionary>(game: &GameController<D>) {
    let hints = game.keyboard_hints();
    for (indent, row) in keyboard_layout(&hints).iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&(letter, hint)| key(letter, hint).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print one evaluation: the guess as tiles and a G/Y/- line below it
pub fn print_score(guess: &str, scores: &[Score; WORD_LENGTH]) {
    let tiles: Vec<String> = guess
        .chars()
        .zip(scores)
        .map(|(letter, &score)| tile(letter.to_ascii_uppercase(), score.into()).to_string())
        .collect();
    let markers: String = scores
        .iter()
        .map(|&score| format!(" {}  ", status_marker(score.into())))
        .collect();
    println!("  {}", tiles.join(" "));
    println!("  {}", markers.trim_end());
}

/// Print session statistics and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Played: {}  Win %: {:.0}  Streak: {}  Max: {}",
        stats.total_games.to_string().bright_white().bold(),
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let best = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count, best, 20);
        println!("  {}: {} {count}", i + 1, bar.green());
    }
    println!("{}", "─".repeat(40).cyan());
}
