//! Score a single guess against a chosen target

use crate::core::{Pattern, Score, WORD_LENGTH, Word, score_words};
use anyhow::{Context, Result};

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub scores: [Score; WORD_LENGTH],
    pub pattern: Pattern,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either argument is not a valid 5-letter word.
///
/// # Examples
/// ```
/// use wordle_game::commands::score_guess;
///
/// let result = score_guess("pplea", "apple").unwrap();
/// assert_eq!(result.pattern.to_emoji(), "🟨🟩🟨🟨🟨");
/// ```
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;
    let scores = score_words(&guess, &target);

    Ok(ScoreResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        scores,
        pattern: Pattern::from_scores(&scores),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_guess_normalizes_words() {
        let result = score_guess("crane", "SLATE").unwrap();
        assert_eq!(result.guess, "CRANE");
        assert_eq!(result.target, "SLATE");
        assert_eq!(result.pattern.count_correct(), 2);
    }

    #[test]
    fn score_guess_rejects_bad_input() {
        let err = score_guess("abc", "apple").unwrap_err();
        assert!(err.to_string().contains("invalid guess 'abc'"));
        assert!(score_guess("apple", "appl3").is_err());
    }
}
