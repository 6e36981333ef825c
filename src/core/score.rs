//! Per-letter verdicts and cell states

/// Verdict for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Score {
    /// Letter not in the target (or all its occurrences already accounted for)
    Absent,
    /// Letter in the target at another position
    Present,
    /// Letter in the right position
    Correct,
}

impl Score {
    /// Base-3 digit used by [`super::Pattern`]
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    #[default]
    Empty,
    Filled,
    Correct,
    Present,
    Absent,
}

impl CellStatus {
    /// Whether the cell has been scored and is now immutable
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }

    /// The score of a scored cell
    #[must_use]
    pub const fn score(self) -> Option<Score> {
        match self {
            Self::Correct => Some(Score::Correct),
            Self::Present => Some(Score::Present),
            Self::Absent => Some(Score::Absent),
            Self::Empty | Self::Filled => None,
        }
    }
}

impl From<Score> for CellStatus {
    fn from(score: Score) -> Self {
        match score {
            Score::Correct => Self::Correct,
            Score::Present => Self::Present,
            Score::Absent => Self::Absent,
        }
    }
}
