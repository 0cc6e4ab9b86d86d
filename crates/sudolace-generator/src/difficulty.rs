//! Difficulty grades and their digging targets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

/// A puzzle difficulty grade.
///
/// The grade fixes how many digits the generator removes from a completed
/// grid. Difficulty is always passed explicitly; nothing in the engine
/// holds a process-wide current grade.
///
/// # Examples
///
/// ```
/// use sudolace_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.removal_count(), 36);
/// assert_eq!(Difficulty::Hard.to_string(), "HARD");
/// assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 36 digits removed.
    Easy,
    /// 43 digits removed.
    Medium,
    /// 49 digits removed.
    Hard,
}

impl Difficulty {
    /// Array containing all grades from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of digits the generator removes for this grade.
    #[must_use]
    pub const fn removal_count(self) -> usize {
        match self {
            Self::Easy => 36,
            Self::Medium => 43,
            Self::Hard => 49,
        }
    }

    /// Returns the uppercase label used in saved history records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unrecognized difficulty label.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
#[display("unknown difficulty label: {label:?}")]
pub struct ParseDifficultyError {
    /// The rejected label.
    pub label: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a difficulty label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError {
                label: s.to_owned(),
            })
    }
}
