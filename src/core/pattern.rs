//! Compact representation of a scored row
//!
//! A pattern encodes the feedback for a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{Score, WORD_LENGTH};

/// Feedback pattern for a scored row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Encode a row of scores
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Pattern, Score::*};
    ///
    /// let pattern = Pattern::from_scores(&[Absent, Present, Correct, Absent, Correct]);
    /// // 0 + 1×3 + 2×9 + 0×27 + 2×81 = 183
    /// assert_eq!(pattern.value(), 183);
    /// ```
    #[must_use]
    pub fn from_scores(scores: &[Score; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for score in scores {
            pattern += score.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decode back into per-position scores
    #[must_use]
    pub fn scores(self) -> [Score; WORD_LENGTH] {
        let mut result = [Score::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Score::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    #[must_use]
    pub fn count_correct(self) -> usize {
        self.scores().iter().filter(|&&s| s == Score::Correct).count()
    }

    #[must_use]
    pub fn count_present(self) -> usize {
        self.scores().iter().filter(|&&s| s == Score::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY"
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and
    /// '-'/'_'/⬛/⬜ for absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬛🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut scores = [Score::Absent; WORD_LENGTH];
        for (slot, ch) in scores.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Score::Correct,
                'Y' | 'y' | '🟨' => Score::Present,
                '-' | '_' | '⬛' | '⬜' => Score::Absent,
                _ => return None,
            };
        }
        Some(Self::from_scores(&scores))
    }

    /// Convert pattern to the emoji row used by the share text
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.scores()
            .iter()
            .map(|score| match score {
                Score::Correct => '🟩',
                Score::Present => '🟨',
                Score::Absent => '⬛',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl From<[Score; WORD_LENGTH]> for Pattern {
    fn from(scores: [Score; WORD_LENGTH]) -> Self {
        Self::from_scores(&scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Score::{Absent, Correct, Present};

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_correct(), 5);
        assert_eq!(Pattern::PERFECT.count_present(), 0);
        assert_eq!(Pattern::PERFECT, Pattern::from_scores(&[Correct; 5]));
    }

    #[test]
    fn pattern_all_absent_is_zero() {
        assert_eq!(Pattern::from_scores(&[Absent; 5]).value(), 0);
    }

    #[test]
    fn pattern_decodes_scores() {
        let scores = [Present, Correct, Absent, Present, Correct];
        assert_eq!(Pattern::from_scores(&scores).scores(), scores);
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("gyg__").unwrap();
        assert_eq!(p1, p2);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GYGGYX").is_none());
        assert!(Pattern::parse("GYG").is_none());
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
    }

    #[test]
    fn pattern_to_emoji() {
        let pattern = Pattern::parse("G-Y-G").unwrap();
        assert_eq!(pattern.to_emoji(), "🟩⬛🟨⬛🟩");
    }
}
