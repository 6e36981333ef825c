//! Turn progression and input routing
//!
//! The controller is the only writer of [`GameState`]. Input is accepted only
//! while the game is playing and no reveal is in progress; everything else
//! is dropped and reported as [`Outcome::Ignored`].

use super::{Dictionary, GameState, GameStatus, RevealSchedule};
use crate::GameConfig;
use crate::core::{CellStatus, Score, Word, score_words};
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::debug;

/// A key press after front-end translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game over, mid-reveal, or a key with no effect
    Ignored,
    LetterAdded,
    LetterRemoved,
    /// Enter on a row with fewer than five letters
    Incomplete,
    /// Full row rejected because the word is unknown
    NotInWordList,
    /// Row scored, next row is now active
    Advanced,
    Won,
    Lost,
}

pub struct GameController<D> {
    state: GameState,
    dictionary: D,
    config: GameConfig,
    reveal: Option<RevealSchedule>,
}

impl<D: Dictionary> GameController<D> {
    /// Start a game with a target drawn from `dictionary`
    pub fn new(mut dictionary: D, config: GameConfig) -> Self {
        let target = dictionary.pick_target();
        debug!("new game started");
        Self {
            state: GameState::new(target),
            dictionary,
            config,
            reveal: None,
        }
    }

    /// Read-only view of the current game
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal.as_ref().is_some_and(|r| !r.is_complete())
    }

    /// When the next reveal step is due, if one is pending
    #[must_use]
    pub fn next_reveal_due(&self) -> Option<Instant> {
        self.reveal.as_ref().and_then(RevealSchedule::next_due)
    }

    /// Route one key press
    ///
    /// # Examples
    /// ```
    /// use std::time::Instant;
    /// use wordle_game::game::{GameController, Key, Outcome};
    /// use wordle_game::wordlists::WordList;
    /// use wordle_game::GameConfig;
    ///
    /// let words = WordList::from_words(["crane"], Some(1)).unwrap();
    /// let mut game = GameController::new(words, GameConfig::default());
    /// let now = Instant::now();
    ///
    /// assert_eq!(game.handle_key(Key::Letter('c'), now), Outcome::LetterAdded);
    /// assert_eq!(game.handle_key(Key::Enter, now), Outcome::Incomplete);
    /// ```
    pub fn handle_key(&mut self, key: Key, now: Instant) -> Outcome {
        if self.state.status.is_over() || self.is_revealing() {
            return Outcome::Ignored;
        }

        match key {
            Key::Letter(ch) => {
                if self.state.grid.add_letter(ch) {
                    Outcome::LetterAdded
                } else {
                    Outcome::Ignored
                }
            }
            Key::Backspace => {
                if self.state.grid.remove_last_letter() {
                    Outcome::LetterRemoved
                } else {
                    Outcome::Ignored
                }
            }
            Key::Enter => self.submit(now),
        }
    }

    fn submit(&mut self, now: Instant) -> Outcome {
        let row_index = self.state.grid.current_row_index();
        let Some(row) = self.state.grid.current_row() else {
            return Outcome::Ignored;
        };
        if !row.is_full() {
            return Outcome::Incomplete;
        }
        let Ok(guess) = Word::new(row.word()) else {
            return Outcome::Ignored;
        };

        if self.config.require_known_word && !self.dictionary.contains(&guess) {
            debug!(%guess, "rejected unknown word");
            return Outcome::NotInWordList;
        }

        let scores = score_words(&guess, &self.state.target);
        self.state.grid.score_current_row(&scores);

        let mut reveal = RevealSchedule::new(row_index, now, self.config.reveal_delay);
        reveal.advance(now);
        self.reveal = Some(reveal);

        let outcome = if scores.iter().all(|&s| s == Score::Correct) {
            self.state.status = GameStatus::Won;
            Outcome::Won
        } else if self.state.grid.advance() {
            Outcome::Advanced
        } else {
            self.state.status = GameStatus::Lost;
            Outcome::Lost
        };

        debug!(
            row = row_index,
            %guess,
            ?outcome,
            "guess scored"
        );
        outcome
    }

    /// Advance any pending reveal; returns whether a cell became visible
    pub fn tick(&mut self, now: Instant) -> bool {
        self.reveal
            .as_mut()
            .is_some_and(|reveal| reveal.advance(now) > 0)
    }

    /// Show every cell of the revealing row immediately
    pub fn skip_reveal(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.finish();
        }
    }

    /// Start over with a fresh target, cancelling any pending reveal
    pub fn reset(&mut self) {
        self.reveal = None;
        self.state = GameState::new(self.dictionary.pick_target());
        debug!("game reset");
    }

    /// Status of a cell as it should currently be drawn
    ///
    /// Scored cells whose reveal step has not fired yet are reported as
    /// `Filled`.
    #[must_use]
    pub fn visible_status(&self, row: usize, col: usize) -> CellStatus {
        let Some(cell) = self
            .state
            .grid
            .row(row)
            .and_then(|r| r.cells().get(col))
        else {
            return CellStatus::Empty;
        };

        match &self.reveal {
            Some(reveal) if cell.status.is_scored() && !reveal.is_visible(row, col) => {
                CellStatus::Filled
            }
            _ => cell.status,
        }
    }

    /// End-of-game message, withheld until the last row is fully revealed
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if self.is_revealing() {
            None
        } else {
            self.state.message()
        }
    }

    /// Best revealed score for every letter guessed so far
    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<char, Score> {
        let mut hints: FxHashMap<char, Score> = FxHashMap::default();
        for (row_index, row) in self.state.grid.rows().iter().enumerate() {
            for (col, cell) in row.cells().iter().enumerate() {
                let (Some(letter), Some(score)) = (
                    cell.letter,
                    self.visible_status(row_index, col).score(),
                ) else {
                    continue;
                };
                hints
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(score))
                    .or_insert(score);
            }
        }
        hints
    }

    /// Share text once the game is over and fully revealed
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        if self.is_revealing() {
            None
        } else {
            self.state.share_text()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_TRIES, WORD_LENGTH};
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Hands out targets in a fixed order and accepts a fixed guess list
    struct Scripted {
        targets: VecDeque<Word>,
        known: Vec<Word>,
    }

    impl Scripted {
        fn new(targets: &[&str]) -> Self {
            let targets: VecDeque<Word> =
                targets.iter().map(|t| Word::new(t).unwrap()).collect();
            let known = targets.iter().cloned().collect();
            Self { targets, known }
        }
    }

    impl Dictionary for Scripted {
        fn pick_target(&mut self) -> Word {
            let word = self.targets.pop_front().unwrap();
            self.targets.push_back(word.clone());
            word
        }

        fn contains(&self, word: &Word) -> bool {
            self.known.contains(word)
        }
    }

    fn instant_game(targets: &[&str]) -> GameController<Scripted> {
        let config = GameConfig::default().with_reveal_delay(Duration::ZERO);
        GameController::new(Scripted::new(targets), config)
    }

    fn type_word<D: Dictionary>(game: &mut GameController<D>, word: &str, now: Instant) {
        for ch in word.chars() {
            game.handle_key(Key::Letter(ch), now);
        }
    }

    fn guess<D: Dictionary>(game: &mut GameController<D>, word: &str, now: Instant) -> Outcome {
        type_word(game, word, now);
        game.handle_key(Key::Enter, now)
    }

    #[test]
    fn starts_playing_on_first_row() {
        let game = instant_game(&["apple"]);
        assert_eq!(game.state().status(), GameStatus::Playing);
        assert_eq!(game.state().current_row_index(), 0);
        assert_eq!(game.state().target().text(), "APPLE");
        assert_eq!(game.message(), None);
    }

    #[test]
    fn letters_and_backspace_edit_current_row() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        assert_eq!(game.handle_key(Key::Letter('a'), now), Outcome::LetterAdded);
        assert_eq!(game.handle_key(Key::Letter('1'), now), Outcome::Ignored);
        assert_eq!(game.handle_key(Key::Backspace, now), Outcome::LetterRemoved);
        assert_eq!(game.handle_key(Key::Backspace, now), Outcome::Ignored);
        assert_eq!(game.state().grid().current_word(), "");
    }

    #[test]
    fn sixth_letter_is_ignored() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        type_word(&mut game, "crane", now);
        assert_eq!(game.handle_key(Key::Letter('s'), now), Outcome::Ignored);
        assert_eq!(game.state().grid().current_word(), "CRANE");
    }

    #[test]
    fn enter_on_incomplete_row_changes_nothing() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        for partial in ["", "c", "cr", "cra", "cran"] {
            game.reset();
            type_word(&mut game, partial, now);
            let before = game.state().clone();
            assert_eq!(game.handle_key(Key::Enter, now), Outcome::Incomplete);
            assert_eq!(game.state(), &before);
            assert_eq!(game.state().current_row_index(), 0);
            assert_eq!(game.state().status(), GameStatus::Playing);
        }
    }

    #[test]
    fn wrong_guess_advances_row() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        assert_eq!(guess(&mut game, "crane", now), Outcome::Advanced);
        assert_eq!(game.state().current_row_index(), 1);
        assert_eq!(game.state().guesses_used(), 1);
        assert!(game.state().grid().row(0).unwrap().is_scored());
        assert_eq!(game.state().status(), GameStatus::Playing);
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        guess(&mut game, "crane", now);
        assert_eq!(guess(&mut game, "APPLE", now), Outcome::Won);
        assert_eq!(game.state().status(), GameStatus::Won);
        assert_eq!(game.message().as_deref(), Some("Congratulations! You won"));
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        for _ in 0..MAX_TRIES - 1 {
            assert_eq!(guess(&mut game, "crane", now), Outcome::Advanced);
        }
        assert_eq!(guess(&mut game, "apple", now), Outcome::Won);
    }

    #[test]
    fn six_misses_lose_and_freeze_input() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        for _ in 0..MAX_TRIES - 1 {
            assert_eq!(guess(&mut game, "crane", now), Outcome::Advanced);
        }
        assert_eq!(guess(&mut game, "crane", now), Outcome::Lost);
        assert_eq!(game.state().status(), GameStatus::Lost);
        assert_eq!(game.message().as_deref(), Some("The word was APPLE."));

        let frozen = game.state().clone();
        for key in [Key::Letter('a'), Key::Backspace, Key::Enter] {
            assert_eq!(game.handle_key(key, now), Outcome::Ignored);
        }
        assert_eq!(game.state(), &frozen);
    }

    #[test]
    fn input_after_win_is_ignored() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        guess(&mut game, "apple", now);
        assert_eq!(game.handle_key(Key::Letter('x'), now), Outcome::Ignored);
        assert_eq!(game.state().current_row_index(), 0);
    }

    #[test]
    fn reset_restores_initial_state_with_next_target() {
        let mut game = instant_game(&["apple", "crane"]);
        let now = Instant::now();
        guess(&mut game, "slate", now);
        type_word(&mut game, "ab", now);

        game.reset();
        let state = game.state();
        assert_eq!(state.current_row_index(), 0);
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.target().text(), "CRANE");
        assert!(state
            .grid()
            .rows()
            .iter()
            .flat_map(|row| row.cells())
            .all(|cell| cell.status == CellStatus::Empty && cell.letter.is_none()));
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let config = GameConfig::default()
            .with_reveal_delay(Duration::ZERO)
            .with_known_words_only(true);
        let mut game = GameController::new(Scripted::new(&["apple", "crane"]), config);
        let now = Instant::now();

        assert_eq!(guess(&mut game, "xxxxx", now), Outcome::NotInWordList);
        assert_eq!(game.state().current_row_index(), 0);
        assert_eq!(game.state().grid().current_word(), "XXXXX");

        // Row stays editable
        for _ in 0..WORD_LENGTH {
            game.handle_key(Key::Backspace, now);
        }
        assert_eq!(guess(&mut game, "crane", now), Outcome::Advanced);
    }

    #[test]
    fn reveal_blocks_input_until_complete() {
        let delay = Duration::from_millis(100);
        let config = GameConfig::default().with_reveal_delay(delay);
        let mut game = GameController::new(Scripted::new(&["apple"]), config);
        let start = Instant::now();

        assert_eq!(guess(&mut game, "crane", start), Outcome::Advanced);
        assert!(game.is_revealing());
        assert_eq!(game.handle_key(Key::Letter('s'), start), Outcome::Ignored);
        assert_eq!(game.state().grid().current_word(), "");

        // Cells appear strictly left to right
        assert_eq!(game.visible_status(0, 0), CellStatus::Filled);
        assert!(game.tick(start + delay));
        assert_eq!(game.visible_status(0, 0), CellStatus::Absent);
        assert_eq!(game.visible_status(0, 1), CellStatus::Filled);

        game.tick(start + delay * 5);
        assert!(!game.is_revealing());
        assert_eq!(game.visible_status(0, 4), CellStatus::Correct);
        assert_eq!(
            game.handle_key(Key::Letter('s'), start + delay * 5),
            Outcome::LetterAdded
        );
    }

    #[test]
    fn end_message_waits_for_reveal() {
        let config = GameConfig::default().with_reveal_delay(Duration::from_millis(50));
        let mut game = GameController::new(Scripted::new(&["apple"]), config);
        let now = Instant::now();

        assert_eq!(guess(&mut game, "apple", now), Outcome::Won);
        assert_eq!(game.message(), None);
        assert_eq!(game.share_text(), None);

        game.skip_reveal();
        assert!(!game.is_revealing());
        assert_eq!(game.message().as_deref(), Some("Congratulations! You won"));
    }

    #[test]
    fn reset_cancels_pending_reveal() {
        let config = GameConfig::default().with_reveal_delay(Duration::from_secs(1));
        let mut game = GameController::new(Scripted::new(&["apple"]), config);
        let now = Instant::now();

        guess(&mut game, "crane", now);
        assert!(game.is_revealing());
        game.reset();
        assert!(!game.is_revealing());
        assert_eq!(game.next_reveal_due(), None);
        assert!(!game.tick(now + Duration::from_secs(10)));
        assert_eq!(game.visible_status(0, 0), CellStatus::Empty);
    }

    #[test]
    fn keyboard_hints_keep_best_score() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        // P present at 0 then correct at 1
        guess(&mut game, "pzzzz", now);
        guess(&mut game, "zpzzz", now);

        let hints = game.keyboard_hints();
        assert_eq!(hints.get(&'P'), Some(&Score::Correct));
        assert_eq!(hints.get(&'Z'), Some(&Score::Absent));
        assert_eq!(hints.get(&'A'), None);
    }

    #[test]
    fn share_text_lists_scored_rows() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        guess(&mut game, "crane", now);
        guess(&mut game, "apple", now);

        assert_eq!(
            game.share_text().as_deref(),
            Some("Wordle 2/6\n\n⬛⬛🟨⬛🟩\n🟩🟩🟩🟩🟩")
        );
    }

    #[test]
    fn share_text_marks_loss_with_x() {
        let mut game = instant_game(&["apple"]);
        let now = Instant::now();
        for _ in 0..MAX_TRIES {
            guess(&mut game, "zzzzz", now);
        }
        let text = game.share_text().unwrap();
        assert!(text.starts_with("Wordle X/6\n"));
        assert_eq!(text.lines().count(), 2 + MAX_TRIES);
    }
}
