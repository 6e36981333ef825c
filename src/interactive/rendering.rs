//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, MAX_TRIES, Score, WORD_LENGTH};
use crate::game::{Dictionary, GameStatus};
use crate::output::formatters::keyboard_layout;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header
            Constraint::Length(CELL_HEIGHT * MAX_TRIES as u16), // Grid
            Constraint::Length(5),                              // Keyboard
            Constraint::Min(4),                                 // Messages
            Constraint::Length(1),                              // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Empty => Style::default().fg(Color::DarkGray),
        CellStatus::Filled => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        CellStatus::Correct => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        CellStatus::Present => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        CellStatus::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

fn render_grid<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let state = app.game.state();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); MAX_TRIES])
        .split(area);

    for (row_index, row) in state.grid().rows().iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); WORD_LENGTH])
            .flex(Flex::Center)
            .split(rows[row_index]);

        let active = state.status() == GameStatus::Playing
            && row_index == state.current_row_index();

        for (col, cell) in row.cells().iter().enumerate() {
            let status = app.game.visible_status(row_index, col);
            let border = if active {
                BorderType::Double
            } else {
                BorderType::Plain
            };
            let letter = cell.letter.unwrap_or(' ').to_string();
            let tile = Paragraph::new(letter)
                .alignment(Alignment::Center)
                .style(cell_style(status))
                .block(Block::default().borders(Borders::ALL).border_type(border));
            f.render_widget(tile, cols[col]);
        }
    }
}

fn key_style(hint: Option<Score>) -> Style {
    match hint {
        Some(Score::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Score::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Score::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let hints = app.game.keyboard_hints();
    let lines: Vec<Line> = keyboard_layout(&hints)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .flat_map(|(key, hint)| {
                    [
                        Span::styled(format!(" {key} "), key_style(hint)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let mut items: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    if app.is_finished()
        && let Some(share) = app.game.share_text()
    {
        items.extend(share.lines().map(|line| ListItem::new(line.to_string())));
    }

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let stats = &app.stats;
    let distribution: Vec<String> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, count)| format!("{}:{count}", i + 1))
        .collect();

    let help = if app.is_finished() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (max {}) | {} | {help}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak,
        distribution.join(" ")
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::game::{GameController, Key};
    use crate::wordlists::WordList;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_grid_letters_and_messages() {
        let words = WordList::from_words(["apple"], Some(1)).unwrap();
        let config = GameConfig::default().with_reveal_delay(Duration::ZERO);
        let mut app = App::new(GameController::new(words, config));
        let now = Instant::now();
        for c in "crane".chars() {
            app.game.handle_key(Key::Letter(c), now);
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("WORDLE"));
        assert!(text.contains("Guess the word!"));
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(text.contains(letter));
        }
    }

    #[test]
    fn cell_colours_follow_status() {
        assert_eq!(cell_style(CellStatus::Correct).bg, Some(Color::Green));
        assert_eq!(cell_style(CellStatus::Present).bg, Some(Color::Yellow));
        assert_eq!(cell_style(CellStatus::Absent).bg, Some(Color::DarkGray));
        assert_eq!(cell_style(CellStatus::Filled).bg, None);
    }
}
