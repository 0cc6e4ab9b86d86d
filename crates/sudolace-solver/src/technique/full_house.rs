use std::collections::BTreeSet;

use sudolace_core::{Board, House};

use crate::{Deduction, Placement, technique::Technique};

const NAME: &str = "Full House";

/// A technique that fills the last empty cell of a house.
///
/// When a row, column, or box has exactly one empty cell, the missing digit
/// is forced. This is the simplest deduction and runs first.
///
/// # Examples
///
/// ```
/// use sudolace_core::Board;
/// use sudolace_solver::technique::{FullHouse, Technique};
///
/// let mut values = [[0; 9]; 9];
/// values[0] = [1, 2, 3, 4, 0, 6, 7, 8, 9];
/// let board = Board::from_values(&values);
///
/// let deduction = FullHouse::new().find(&board);
/// assert!(deduction.is_some());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FullHouse {}

impl FullHouse {
    /// Creates a new `FullHouse` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for FullHouse {
    fn name(&self) -> &'static str {
        NAME
    }

    fn find(&self, board: &Board) -> Option<Deduction> {
        let mut placements = BTreeSet::new();
        for house in House::ALL {
            let mut empties = house
                .positions()
                .into_iter()
                .filter(|&pos| board[pos].is_empty());
            if let (Some(position), None) = (empties.next(), empties.next())
                && let Some(digit) = board.missing_digits(house).as_single()
            {
                placements.insert(Placement { position, digit });
            }
        }
        (!placements.is_empty()).then_some(Deduction::Placements(placements))
    }
}
