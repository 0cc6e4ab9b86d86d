use std::collections::BTreeSet;

use sudolace_core::{Board, Position};

use crate::{Deduction, Placement, technique::Technique};

const NAME: &str = "Hidden Single";

/// A technique that finds candidates no peer competes for.
///
/// A cell may list several candidates, yet one of them appears in no other
/// candidate list among the cell's 20 peers. No peer can ever take that
/// digit, so the cell must. The scan requires the digit to be absent from
/// the row, the column, and the box simultaneously.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn find(&self, board: &Board) -> Option<Deduction> {
        let mut placements = BTreeSet::new();
        for position in Position::ALL {
            if !board[position].is_empty() {
                continue;
            }
            let peers = position.peers();
            for digit in board.candidates(position) {
                let contested = peers
                    .iter()
                    .any(|&peer| board.candidates(peer).contains(digit));
                if !contested {
                    placements.insert(Placement { position, digit });
                }
            }
        }
        (!placements.is_empty()).then_some(Deduction::Placements(placements))
    }
}

#[cfg(test)]
mod tests {
    use sudolace_core::{Digit, DigitSet};

    use super::*;

    #[test]
    fn test_uncontested_candidate_is_placed() {
        let mut board = Board::new();
        // (0, 0) lists 2 and 5; a peer also lists 2, nobody lists 5
        board.set_candidates(
            Position::new(0, 0),
            DigitSet::from_iter([Digit::D2, Digit::D5]),
        );
        board.set_candidates(Position::new(0, 1), DigitSet::from_elem(Digit::D2));

        let Some(Deduction::Placements(placements)) = HiddenSingle::new().find(&board) else {
            panic!("expected a placement");
        };
        assert!(placements.contains(&Placement {
            position: Position::new(0, 0),
            digit: Digit::D5,
        }));
        assert!(!placements.contains(&Placement {
            position: Position::new(0, 0),
            digit: Digit::D2,
        }));
    }

    #[test]
    fn test_requires_all_three_units_clear() {
        let mut board = Board::new();
        board.set_candidates(
            Position::new(4, 4),
            DigitSet::from_iter([Digit::D3, Digit::D8]),
        );
        // 3 is contested from the row, 8 from a distant column cell
        board.set_candidates(Position::new(4, 0), DigitSet::from_elem(Digit::D3));
        board.set_candidates(Position::new(0, 4), DigitSet::from_elem(Digit::D8));

        // Every candidate on the board is contested by some peer, so the
        // technique finds nothing
        assert!(HiddenSingle::new().find(&board).is_none());
    }

    #[test]
    fn test_box_peer_contests() {
        let mut board = Board::new();
        board.set_candidates(
            Position::new(0, 0),
            DigitSet::from_iter([Digit::D4, Digit::D9]),
        );
        // (2, 2) shares only the box with (0, 0)
        board.set_candidates(Position::new(2, 2), DigitSet::from_elem(Digit::D4));

        let Some(Deduction::Placements(placements)) = HiddenSingle::new().find(&board) else {
            panic!("expected a placement");
        };
        assert!(placements.contains(&Placement {
            position: Position::new(0, 0),
            digit: Digit::D9,
        }));
        assert!(!placements.contains(&Placement {
            position: Position::new(0, 0),
            digit: Digit::D4,
        }));
    }

    #[test]
    fn test_no_finding_without_candidates() {
        let board = Board::new();
        assert!(HiddenSingle::new().find(&board).is_none());
    }
}
