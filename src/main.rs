//! Wordle - CLI
//!
//! Terminal Wordle with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_game::{
    GameConfig,
    commands::{run_simple, score_guess},
    game::GameController,
    output::print_score,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'answers' (default, embedded) or path to file
    #[arg(short = 'w', long, global = true, default_value = "answers")]
    wordlist: String,

    /// Seed for target selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Milliseconds between revealing two cells of a scored row
    #[arg(long, global = true, default_value_t = 300)]
    reveal_ms: u64,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score one guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_reveal_delay(Duration::from_millis(self.reveal_ms))
            .with_known_words_only(self.strict)
            .with_seed(self.seed)
    }
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str, seed: Option<u64>) -> Result<WordList> {
    match wordlist {
        "answers" => WordList::embedded(seed).context("embedded word list is unusable"),
        path => WordList::from_file(path, seed)
            .with_context(|| format!("failed to load word list from {path}")),
    }
}

/// Install the tracing subscriber
///
/// Filtering follows `RUST_LOG`, defaulting to warnings only.
fn init_logging(log_file: Option<&Path>, allow_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    } else if allow_stderr {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    let is_tui = matches!(command, Commands::Play);
    init_logging(cli.log_file.as_deref(), !is_tui)?;

    match command {
        Commands::Score { guess, target } => {
            let result = score_guess(guess, target)?;
            print_score(&result.guess, &result.scores);
            println!("  {}", result.pattern.to_emoji());
            Ok(())
        }
        Commands::Play => {
            use wordle_game::interactive::{App, run_tui};

            let config = cli.config();
            let words = load_wordlist(&cli.wordlist, config.seed)?;
            run_tui(App::new(GameController::new(words, config)))
        }
        Commands::Simple => {
            let config = cli.config();
            let words = load_wordlist(&cli.wordlist, config.seed)?;
            run_simple(GameController::new(words, config))
        }
    }
}
