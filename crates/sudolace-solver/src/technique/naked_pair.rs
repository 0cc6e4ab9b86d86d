use sudolace_core::{Board, House, Position};

use crate::{Deduction, Eliminations, technique::Technique};

const NAME: &str = "Naked Pair";

/// A technique that finds two cells in a house sharing the same two
/// candidates.
///
/// Those two digits are locked into the pair cells, so they can be removed
/// from every other candidate list in the house. Pairs whose removal set is
/// empty are not reported; a finding always changes the board when applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair {}

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn find(&self, board: &Board) -> Option<Deduction> {
        let mut eliminations = Eliminations::new();
        for house in House::ALL {
            let positions = house.positions();
            let pair_cells: Vec<Position> = positions
                .iter()
                .copied()
                .filter(|&pos| board[pos].is_empty() && board.candidates(pos).len() == 2)
                .collect();

            for (i, &a) in pair_cells.iter().enumerate() {
                for &b in &pair_cells[i + 1..] {
                    let pair = board.candidates(a);
                    if pair != board.candidates(b) {
                        continue;
                    }
                    let mut any_removal = false;
                    for &other in &positions {
                        if other == a || other == b || !board[other].is_empty() {
                            continue;
                        }
                        let overlap = board.candidates(other) & pair;
                        if !overlap.is_empty() {
                            eliminations.add_removal(other, overlap);
                            any_removal = true;
                        }
                    }
                    if any_removal {
                        eliminations.add_pair(a, b);
                    }
                }
            }
        }
        (!eliminations.is_empty()).then_some(Deduction::Eliminations(eliminations))
    }
}
