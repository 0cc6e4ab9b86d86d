//! Deduction results produced by the techniques.

use std::collections::{BTreeMap, BTreeSet};

use sudolace_core::{Board, Digit, DigitSet, Position};

/// A single cell placement deduced by a technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    /// The cell to fill.
    pub position: Position,
    /// The digit to place there.
    pub digit: Digit,
}

/// Candidate removals deduced by a pair technique.
///
/// `pair_positions` names the cells forming the pair(s); `removals` maps
/// each affected cell to the digits to strip from its candidate set.
/// Findings from several pairs in one pass merge into a single value, with
/// overlapping removals unioned per cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Eliminations {
    pair_positions: BTreeSet<Position>,
    removals: BTreeMap<Position, DigitSet>,
}

impl Eliminations {
    /// Creates an empty set of eliminations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the two cells forming a pair.
    pub fn add_pair(&mut self, a: Position, b: Position) {
        self.pair_positions.insert(a);
        self.pair_positions.insert(b);
    }

    /// Records digits to remove from the candidates of `pos`.
    ///
    /// Repeated calls for the same cell union their digit sets.
    pub fn add_removal(&mut self, pos: Position, digits: DigitSet) {
        if !digits.is_empty() {
            *self.removals.entry(pos).or_default() |= digits;
        }
    }

    /// Returns the cells forming the pair(s).
    #[must_use]
    pub fn pair_positions(&self) -> &BTreeSet<Position> {
        &self.pair_positions
    }

    /// Returns the per-cell candidate removals.
    #[must_use]
    pub fn removals(&self) -> &BTreeMap<Position, DigitSet> {
        &self.removals
    }

    /// Returns `true` if no removal has been recorded.
    ///
    /// A pair with nothing to remove is not worth reporting; the dispatcher
    /// treats it as no finding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }
}

/// The outcome of a successful technique scan.
///
/// Placement techniques report every instance found in one pass; the set
/// collapses duplicate findings of the same cell and digit. Elimination
/// techniques report merged candidate removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deduction {
    /// Cells whose value is now known.
    Placements(BTreeSet<Placement>),
    /// Candidates that can be removed.
    Eliminations(Eliminations),
}

impl Deduction {
    /// Applies the deduction to `board`: places the deduced values or strips
    /// the deduced candidates.
    pub fn apply(&self, board: &mut Board) {
        match self {
            Deduction::Placements(placements) => {
                for placement in placements {
                    board.set_value(placement.position, Some(placement.digit));
                }
            }
            Deduction::Eliminations(eliminations) => {
                for (&pos, &digits) in eliminations.removals() {
                    board.remove_candidates(pos, digits);
                }
            }
        }
    }
}
