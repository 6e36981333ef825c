//! Guess scoring
//!
//! Implements Wordle's feedback rules with the two-pass letter-frequency
//! algorithm: exact matches are claimed first so a repeated guess letter is
//! never marked present more often than it occurs, unmatched, in the target.

use super::{Score, WORD_LENGTH, Word};
use crate::error::GameError;
use rustc_hash::FxHashMap;

/// Score a guess against a target
///
/// Comparison is case-insensitive.
///
/// # Errors
///
/// Returns `GameError::InvariantViolation` if the two words differ in length
/// or are not `WORD_LENGTH` letters long. Such a call is a caller bug; user
/// input never reaches this function unvalidated.
///
/// # Examples
/// ```
/// use wordle_game::core::{score, Score::*};
///
/// let scores = score("PPLEA", "APPLE").unwrap();
/// assert_eq!(scores, [Present, Correct, Present, Present, Present]);
///
/// assert!(score("APPLE", "PEAR").is_err());
/// ```
pub fn score(guess: &str, target: &str) -> Result<[Score; WORD_LENGTH], GameError> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

    if guess.len() != target.len() {
        return Err(GameError::invariant(format!(
            "guess has {} letters, target has {}",
            guess.len(),
            target.len()
        )));
    }

    let guess: [char; WORD_LENGTH] = guess.try_into().map_err(|g: Vec<char>| {
        GameError::invariant(format!(
            "words must have {WORD_LENGTH} letters, got {}",
            g.len()
        ))
    })?;
    let target: [char; WORD_LENGTH] = target
        .try_into()
        .map_err(|_| GameError::invariant("target length changed during scoring"))?;

    Ok(two_pass(&guess, &target))
}

/// Score two validated words
///
/// # Examples
/// ```
/// use wordle_game::core::{score_words, Score::*, Word};
///
/// let guess = Word::new("speed").unwrap();
/// let target = Word::new("erase").unwrap();
/// assert_eq!(
///     score_words(&guess, &target),
///     [Present, Absent, Present, Present, Absent]
/// );
/// ```
#[must_use]
pub fn score_words(guess: &Word, target: &Word) -> [Score; WORD_LENGTH] {
    two_pass(guess.chars(), target.chars())
}

fn two_pass<T>(guess: &[T; WORD_LENGTH], target: &[T; WORD_LENGTH]) -> [Score; WORD_LENGTH]
where
    T: Copy + Eq + std::hash::Hash,
{
    let mut result = [Score::Absent; WORD_LENGTH];
    let mut matched = [false; WORD_LENGTH];

    let mut remaining: FxHashMap<T, u8> = FxHashMap::default();
    for &letter in target {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    // First pass: exact positions claim their letter
    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            result[i] = Score::Correct;
            matched[i] = true;
            if let Some(count) = remaining.get_mut(&guess[i]) {
                *count -= 1;
            }
        }
    }

    // Second pass: remaining positions draw from what is left
    for i in (0..WORD_LENGTH).filter(|&i| !matched[i]) {
        if let Some(count) = remaining.get_mut(&guess[i])
            && *count > 0
        {
            result[i] = Score::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use Score::{Absent, Correct, Present};

    fn count(scores: &[Score], wanted: Score) -> usize {
        scores.iter().filter(|&&s| s == wanted).count()
    }

    #[test]
    fn repeated_letter_regression_anchor() {
        assert_eq!(
            score("PPLEA", "APPLE").unwrap(),
            [Present, Correct, Present, Present, Present]
        );
    }

    #[test]
    fn exact_guess_is_all_correct() {
        for word in ["CRANE", "APPLE", "AAAAA", "SPEED", "ZZZZZ"] {
            assert_eq!(score(word, word).unwrap(), [Correct; 5]);
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(score("crane", "CRANE").unwrap(), [Correct; 5]);
    }

    #[test]
    fn correct_count_equals_positional_matches() {
        let pairs = [
            ("CRANE", "SLATE"),
            ("ROBOT", "FLOOR"),
            ("SPEED", "ERASE"),
            ("EERIE", "WATER"),
            ("LLAMA", "HELLO"),
        ];
        for (guess, target) in pairs {
            let expected = guess
                .chars()
                .zip(target.chars())
                .filter(|(g, t)| g == t)
                .count();
            let scores = score(guess, target).unwrap();
            assert_eq!(count(&scores, Correct), expected, "{guess} vs {target}");
        }
    }

    #[test]
    fn non_absent_never_exceeds_target_occurrences() {
        let pairs = [
            ("EERIE", "WATER"),
            ("SPEED", "ABIDE"),
            ("LLLLL", "HELLO"),
            ("OOOOO", "FLOOR"),
            ("PPLEA", "APPLE"),
        ];
        for (guess, target) in pairs {
            let scores = score(guess, target).unwrap();
            for letter in guess.chars() {
                let marked = guess
                    .chars()
                    .zip(scores)
                    .filter(|&(g, s)| g == letter && s != Absent)
                    .count();
                let in_target = target.chars().filter(|&t| t == letter).count();
                assert!(marked <= in_target, "{letter} in {guess} vs {target}");
            }
        }
    }

    #[test]
    fn anagram_marks_every_letter() {
        // A permutation has every letter available exactly as often as guessed
        let scores = score("LEAPP", "APPLE").unwrap();
        assert_eq!(count(&scores, Absent), 0);
    }

    #[test]
    fn green_takes_priority_over_yellow() {
        // Second O is green, first O may only take the remaining copy
        assert_eq!(
            score("ROBOT", "FLOOR").unwrap(),
            [Present, Present, Absent, Correct, Absent]
        );
        assert_eq!(
            score("LLLLL", "HELLO").unwrap(),
            [Absent, Absent, Correct, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letters_with_single_target_letter() {
        assert_eq!(
            score("EERIE", "WATER").unwrap(),
            [Present, Absent, Present, Absent, Absent]
        );
        assert_eq!(
            score("SPEED", "ABIDE").unwrap(),
            [Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn mismatched_lengths_fail_loudly() {
        assert!(matches!(
            score("APPLE", "PEAR"),
            Err(GameError::InvariantViolation(_))
        ));
        assert!(matches!(
            score("ABCDEF", "ABCDEF"),
            Err(GameError::InvariantViolation(_))
        ));
        assert!(matches!(score("", ""), Err(GameError::InvariantViolation(_))));
    }

    #[test]
    fn typed_and_string_scoring_agree() {
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        assert_eq!(
            score_words(&guess, &target),
            score(guess.text(), target.text()).unwrap()
        );
    }
}
