//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line on stdin.

use crate::core::WORD_LENGTH;
use crate::game::{Dictionary, GameController, GameStatus, Key, Outcome, Statistics};
use crate::output::{print_board, print_keyboard, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<D: Dictionary>(mut game: GameController<D>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode            ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word. Type a guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stats = Statistics::default();

    loop {
        print_board(&game);
        println!();
        print_keyboard(&game);
        println!();

        if let Some(message) = game.message() {
            stats.record(game.state());
            finish_banner(&game, &message);
            print_statistics(&stats);

            let again = prompt(&mut lines, "Play again? (yes/no)")?;
            if matches!(again.as_deref(), Some("yes" | "y")) {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let turn = game.state().current_row_index() + 1;
        let Some(input) = prompt(&mut lines, &format!("Guess {turn}"))? else {
            return Ok(());
        };

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.reset();
                println!("\n🔄 New game started!\n");
            }
            guess => submit_line(&mut game, guess),
        }
    }
}

/// Type a whole line into the controller and submit it
fn submit_line<D: Dictionary>(game: &mut GameController<D>, guess: &str) {
    if guess.chars().count() != WORD_LENGTH {
        println!("❌ Guess must be exactly {WORD_LENGTH} letters\n");
        return;
    }

    let now = Instant::now();
    for ch in guess.chars() {
        game.handle_key(Key::Letter(ch), now);
    }

    let outcome = game.handle_key(Key::Enter, now);
    // Line mode has no animation
    game.skip_reveal();

    match outcome {
        Outcome::Incomplete => println!("❌ Letters only, please\n"),
        Outcome::NotInWordList => println!("❌ Not in word list\n"),
        _ => {}
    }

    // Leave the row clean for the next attempt if it was not scored
    if matches!(outcome, Outcome::Incomplete | Outcome::NotInWordList) {
        while game.handle_key(Key::Backspace, now) == Outcome::LetterRemoved {}
    }
}

fn finish_banner<D: Dictionary>(game: &GameController<D>, message: &str) {
    println!("{}", "═".repeat(44).bright_cyan());
    if game.state().status() == GameStatus::Won {
        println!("  {}", message.bright_green().bold());
    } else {
        println!("  {}", message.bright_red().bold());
    }
    if let Some(share) = game.share_text() {
        println!();
        for line in share.lines() {
            println!("  {line}");
        }
    }
    println!("{}", "═".repeat(44).bright_cyan());
}

/// Read one trimmed, lowercased line; `None` on end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    match lines.next() {
        Some(line) => {
            let line = line.context("failed to read from stdin")?;
            Ok(Some(line.trim().to_lowercase()))
        }
        None => Ok(None),
    }
}
