//! TUI application state and logic

use crate::game::{Dictionary, GameController, GameStatus, Key, Outcome, Statistics};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest wait for input before the loop redraws
const TICK_RATE: Duration = Duration::from_millis(100);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<D> {
    pub game: GameController<D>,
    pub stats: Statistics,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Translate a terminal key into game input
#[must_use]
pub const fn game_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Key::Letter(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(game: GameController<D>) -> Self {
        Self {
            game,
            stats: Statistics::default(),
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            recorded: false,
        }
    }

    /// Whether the game is over and its last row fully revealed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.game.state().status().is_over() && !self.game.is_revealing()
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.is_finished() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        let Some(input) = game_key(key.code) else {
            return;
        };
        match self.game.handle_key(input, now) {
            Outcome::Incomplete => self.add_message("Not enough letters", MessageStyle::Error),
            Outcome::NotInWordList => self.add_message("Not in word list", MessageStyle::Error),
            _ => {}
        }
    }

    /// Advance reveal animation and announce a finished game once
    pub fn on_tick(&mut self, now: Instant) {
        self.game.tick(now);

        if self.recorded || !self.is_finished() {
            return;
        }
        self.recorded = true;
        self.stats.record(self.game.state());

        let style = if self.game.state().status() == GameStatus::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        if let Some(message) = self.game.message() {
            self.add_message(&message, style);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.recorded = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        debug!(games = self.stats.total_games, "starting another game");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// How long the event loop may block before something needs redrawing
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.game
            .next_reveal_due()
            .map_or(TICK_RATE, |due| due.saturating_duration_since(now))
            .min(TICK_RATE)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key, Instant::now());
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}
