use std::collections::BTreeSet;

use sudolace_core::{Board, Position};

use crate::{Deduction, Placement, technique::Technique};

const NAME: &str = "Naked Single";

/// A technique that fills cells whose candidate list has shrunk to one digit.
///
/// This works purely from the candidate annotations: a cell listing a single
/// candidate takes that digit. Stale annotations produce stale findings, so
/// callers keep candidates current before scanning.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle {}

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn find(&self, board: &Board) -> Option<Deduction> {
        let mut placements = BTreeSet::new();
        for position in Position::ALL {
            if board[position].is_empty()
                && let Some(digit) = board.candidates(position).as_single()
            {
                placements.insert(Placement { position, digit });
            }
        }
        (!placements.is_empty()).then_some(Deduction::Placements(placements))
    }
}
