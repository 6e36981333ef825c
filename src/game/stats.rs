//! Session statistics

use super::{GameState, GameStatus};
use crate::core::MAX_TRIES;

/// Results across the games of one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[i]` counts wins in `i + 1` guesses
    pub guess_distribution: [usize; MAX_TRIES],
}

impl Statistics {
    /// Record a finished game; games still in progress are ignored
    pub fn record(&mut self, state: &GameState) {
        match state.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = state
                    .guesses_used()
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            GameStatus::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Win rate in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Score, Word};

    fn finished(status: GameStatus, rows: usize) -> GameState {
        let mut state = GameState::new(Word::new("apple").unwrap());
        for _ in 0..rows {
            "crane".chars().for_each(|ch| {
                state.grid.add_letter(ch);
            });
            state.grid.score_current_row(&[Score::Absent; 5]);
            state.grid.advance();
        }
        state.status = status;
        state
    }

    #[test]
    fn playing_games_are_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(&finished(GameStatus::Playing, 2));
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn wins_update_streak_and_distribution() {
        let mut stats = Statistics::default();
        stats.record(&finished(GameStatus::Won, 3));
        stats.record(&finished(GameStatus::Won, 1));
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.guess_distribution, [1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn loss_breaks_streak_but_keeps_max() {
        let mut stats = Statistics::default();
        stats.record(&finished(GameStatus::Won, 2));
        stats.record(&finished(GameStatus::Won, 2));
        stats.record(&finished(GameStatus::Lost, 6));
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
