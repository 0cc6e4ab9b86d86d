//! Human-style deduction techniques.
//!
//! Each technique scans a board read-only and reports everything it finds
//! in one pass as a [`Deduction`]. Nothing is applied here; the caller
//! decides when (and whether) to commit a finding, which is what makes the
//! two-phase hint flow possible.
//!
//! [`find_deduction`] runs the techniques in difficulty order and returns
//! the first non-empty result.

mod full_house;
mod hidden_pair;
mod hidden_single;
mod naked_pair;
mod naked_single;

use sudolace_core::Board;

pub use self::{
    full_house::FullHouse, hidden_pair::HiddenPair, hidden_single::HiddenSingle,
    naked_pair::NakedPair, naked_single::NakedSingle,
};
use crate::Deduction;

/// A deduction technique.
pub trait Technique {
    /// Returns the human-readable name of this technique.
    fn name(&self) -> &'static str;

    /// Scans the board and returns all findings, or `None` if the technique
    /// does not apply anywhere.
    fn find(&self, board: &Board) -> Option<Deduction>;
}

/// A boxed technique trait object.
pub type BoxedTechnique = Box<dyn Technique>;

/// Returns all techniques in dispatch order, simplest first: full house,
/// naked single, hidden single, naked pair, hidden pair.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(FullHouse::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedPair::new()),
        Box::new(HiddenPair::new()),
    ]
}

/// A deduction together with the name of the technique that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Name of the technique that found the deduction.
    pub technique: &'static str,
    /// The deduction itself.
    pub deduction: Deduction,
}

/// Runs the techniques in dispatch order and returns the first finding.
///
/// Returns `None` when no technique applies, which is the signal for the
/// hint system to fall back to revealing a cell.
#[must_use]
pub fn find_deduction(board: &Board) -> Option<Finding> {
    all_techniques().iter().find_map(|technique| {
        technique.find(board).map(|deduction| Finding {
            technique: technique.name(),
            deduction,
        })
    })
}

#[cfg(test)]
mod tests {
    use sudolace_core::{Digit, DigitSet, Position};

    use super::*;

    #[test]
    fn test_dispatch_order() {
        let names: Vec<_> = all_techniques()
            .iter()
            .map(|technique| technique.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "Full House",
                "Naked Single",
                "Hidden Single",
                "Naked Pair",
                "Hidden Pair",
            ]
        );
    }

    #[test]
    fn test_simplest_technique_wins() {
        // Row 8 has a single gap (a full house) while row 0 carries a naked
        // pair; the dispatcher must report the full house.
        let mut values = [[0; 9]; 9];
        values[8] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        let mut board = Board::from_values(&values);
        board.set_candidates(
            Position::new(0, 0),
            DigitSet::from_iter([Digit::D3, Digit::D7]),
        );
        board.set_candidates(
            Position::new(0, 1),
            DigitSet::from_iter([Digit::D3, Digit::D7]),
        );
        board.set_candidates(
            Position::new(0, 2),
            DigitSet::from_iter([Digit::D3, Digit::D5, Digit::D7]),
        );

        let finding = find_deduction(&board).unwrap();
        assert_eq!(finding.technique, "Full House");
        match finding.deduction {
            Deduction::Placements(placements) => {
                assert!(placements.contains(&crate::Placement {
                    position: Position::new(8, 8),
                    digit: Digit::D9,
                }));
            }
            Deduction::Eliminations(_) => panic!("expected placements"),
        }
    }

    #[test]
    fn test_no_finding_on_blank_board() {
        // A blank board with no candidate annotations offers nothing
        let board = Board::new();
        assert!(find_deduction(&board).is_none());
    }
}
