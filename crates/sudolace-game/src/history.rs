//! Serializable snapshots of finished or suspended games.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use sudolace_core::{Board, Digit, DigitSet, Position};
use sudolace_generator::ParseDifficultyError;

/// Error returned when a snapshot cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum HistoryError {
    /// The difficulty label is not one of the known grades.
    #[display("unknown difficulty: {_0}")]
    #[from]
    UnknownDifficulty(ParseDifficultyError),

    /// A cell value is outside the range 0-9.
    #[display("invalid value {value} at row {row}, column {col}")]
    InvalidValue {
        /// Row of the offending cell (0-8).
        row: usize,
        /// Column of the offending cell (0-8).
        col: usize,
        /// The rejected value.
        value: u8,
    },

    /// A candidate bitmask uses bits outside the nine digit bits.
    #[display("invalid candidate bits {bits:#x} at row {row}, column {col}")]
    InvalidCandidates {
        /// Row of the offending cell (0-8).
        row: usize,
        /// Column of the offending cell (0-8).
        col: usize,
        /// The rejected bitmask.
        bits: u16,
    },

    /// A cell carries both a value and candidate bits.
    #[display("cell at row {row}, column {col} has both a value and candidates")]
    ConflictingCell {
        /// Row of the offending cell (0-8).
        row: usize,
        /// Column of the offending cell (0-8).
        col: usize,
    },

    /// The stored solution grid is not a valid solved grid.
    #[display("stored solution is not a solved grid")]
    UnsolvedSolution,
}

/// A board frozen as plain integers.
///
/// `values` holds 0 for an empty cell and 1-9 otherwise; `candidates`
/// holds the raw candidate bitmask of each cell (bits 0-8 for digits 1-9,
/// always 0 for a filled cell).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Cell values in row-major order.
    pub values: [[u8; 9]; 9],
    /// Candidate bitmasks in row-major order.
    pub candidates: [[u16; 9]; 9],
}

impl BoardSnapshot {
    /// Freezes a board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut values = [[0; 9]; 9];
        let mut candidates = [[0; 9]; 9];
        for pos in Position::ALL {
            let (row, col) = (usize::from(pos.row()), usize::from(pos.col()));
            values[row][col] = board.value(pos).map_or(0, |d| d.value());
            candidates[row][col] = board.candidates(pos).bits();
        }
        Self { values, candidates }
    }

    /// Thaws a board, validating every cell.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError`] if a value is out of range, a candidate
    /// bitmask uses invalid bits, or a cell carries both.
    pub fn to_board(&self) -> Result<Board, HistoryError> {
        let mut board = Board::new();
        for pos in Position::ALL {
            let (row, col) = (usize::from(pos.row()), usize::from(pos.col()));
            let value = self.values[row][col];
            let bits = self.candidates[row][col];

            let digit = match value {
                0 => None,
                _ => Some(
                    Digit::from_value(value)
                        .ok_or(HistoryError::InvalidValue { row, col, value })?,
                ),
            };
            let candidates = DigitSet::try_from_bits(bits)
                .ok_or(HistoryError::InvalidCandidates { row, col, bits })?;
            if digit.is_some() && !candidates.is_empty() {
                return Err(HistoryError::ConflictingCell { row, col });
            }

            if let Some(digit) = digit {
                board.set_value(pos, Some(digit));
            } else {
                board.set_candidates(pos, candidates);
            }
        }
        Ok(board)
    }
}

/// A finished or suspended game, ready for persistence.
///
/// The engine does no I/O itself; callers serialize this however they
/// store their history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// The pristine starting grid.
    pub original: BoardSnapshot,
    /// The solved grid.
    pub solved: BoardSnapshot,
    /// Total play time in seconds.
    pub elapsed_seconds: u64,
    /// Difficulty label, e.g. `"EASY"`.
    pub difficulty: String,
}

impl HistorySnapshot {
    /// Formats the elapsed time as minutes and zero-padded seconds,
    /// e.g. `"4:07"`. The minutes wrap at the hour.
    #[must_use]
    pub fn elapsed_time_formatted(&self) -> String {
        let minutes = (self.elapsed_seconds % 3600) / 60;
        let seconds = self.elapsed_seconds % 60;
        format!("{minutes}:{seconds:02}")
    }
}
