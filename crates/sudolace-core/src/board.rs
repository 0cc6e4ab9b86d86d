//! The 9×9 board and its constraint queries.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{Cell, Digit, DigitSet, House, Position};

/// A 9×9 sudoku board stored as a flat array of 81 cells in row-major order.
///
/// The board itself enforces no sudoku rules on mutation; it answers
/// constraint queries ([`is_value_valid`], [`possible_values`]) and leaves
/// policy to the callers. A player move that breaks a rule still lands on
/// the board, which is what lets a UI show conflicts.
///
/// [`is_value_valid`]: Board::is_value_valid
/// [`possible_values`]: Board::possible_values
///
/// # Examples
///
/// ```
/// use sudolace_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// board.set_value(Position::new(0, 0), Some(Digit::D5));
///
/// assert!(!board.is_value_valid(Position::new(0, 3), Digit::D5));
/// assert!(board.is_value_valid(Position::new(3, 3), Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::empty(); 81],
        }
    }

    /// Creates a board from a 9×9 value grid, where 0 means an empty cell.
    ///
    /// Values outside 0-9 are treated as empty. Candidate sets start empty;
    /// call [`recompute_candidates`](Board::recompute_candidates) to derive
    /// them from occupancy.
    #[must_use]
    pub fn from_values(values: &[[u8; 9]; 9]) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            board.set_value(pos, Digit::from_value(value));
        }
        board
    }

    /// Returns the value at `pos`, if any.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].value()
    }

    /// Returns the candidate set at `pos`.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()].candidates()
    }

    /// Places or clears the value at `pos`, discarding the cell's candidates.
    pub fn set_value(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()].set_value(value);
    }

    /// Replaces the candidate set at `pos`, clearing any placed value.
    pub fn set_candidates(&mut self, pos: Position, candidates: DigitSet) {
        self.cells[pos.index()].set_candidates(candidates);
    }

    /// Removes `digits` from the candidate set at `pos`.
    pub fn remove_candidates(&mut self, pos: Position, digits: DigitSet) {
        self.cells[pos.index()].remove_candidates(digits);
    }

    /// Returns `true` if placing `digit` at `pos` would not duplicate a
    /// value already present in the cell's row, column, or box.
    ///
    /// The cell at `pos` itself is excluded from the scan, so re-asserting
    /// an already-placed digit is valid.
    #[must_use]
    pub fn is_value_valid(&self, pos: Position, digit: Digit) -> bool {
        pos.peers()
            .iter()
            .all(|&peer| self.value(peer) != Some(digit))
    }

    /// Returns the digits not yet placed in any of the cell's row, column,
    /// or box.
    #[must_use]
    pub fn possible_values(&self, pos: Position) -> DigitSet {
        let mut possible = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.value(peer) {
                possible.remove(digit);
            }
        }
        possible
    }

    /// Recomputes the candidate set of every empty cell from occupancy.
    ///
    /// Filled cells are untouched.
    pub fn recompute_candidates(&mut self) {
        for pos in Position::ALL {
            if self[pos].is_empty() {
                let possible = self.possible_values(pos);
                self.set_candidates(pos, possible);
            }
        }
    }

    /// Returns `true` if every cell has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if the board is complete and every row, column, and
    /// box contains each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        House::ALL.iter().all(|house| {
            let placed: DigitSet = house
                .positions()
                .iter()
                .filter_map(|&pos| self.value(pos))
                .collect();
            placed == DigitSet::FULL
        })
    }

    /// Returns all empty positions in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self[pos].is_empty())
            .collect()
    }

    /// Returns the first empty position in row-major order, if any.
    #[must_use]
    pub fn first_empty_position(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_empty())
    }

    /// Returns the digits not yet placed anywhere in `house`.
    #[must_use]
    pub fn missing_digits(&self, house: House) -> DigitSet {
        let placed: DigitSet = house
            .positions()
            .iter()
            .filter_map(|&pos| self.value(pos))
            .collect();
        DigitSet::FULL.difference(placed)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.value(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
