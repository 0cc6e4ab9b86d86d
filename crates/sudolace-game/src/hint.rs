//! The two-phase hint flow.
//!
//! A hint request first *proposes* a deduction without touching the board,
//! so the player can study the highlighted cells. The next request
//! *commits* it. Any board mutation in between withdraws the proposal,
//! since it may no longer hold on the changed grid.
//!
//! When no technique applies, the fallback reveals one random empty cell
//! from the solved grid.

use rand::seq::IndexedRandom as _;
use sudolace_core::{Digit, Position};
use sudolace_solver::{Deduction, Finding, find_deduction};

use crate::Session;

/// The result of a hint request.
#[derive(Debug, Clone)]
pub enum HintOutcome {
    /// A deduction was found and armed; nothing changed on the board yet.
    /// The next request commits it.
    Proposed(Finding),
    /// The previously proposed deduction has been applied to the board.
    Applied(Finding),
    /// No technique applied, so a cell was filled in from the solution.
    Revealed {
        /// The revealed cell.
        position: Position,
        /// The digit placed there.
        digit: Digit,
    },
    /// The board is already complete; there is nothing to hint at.
    Complete,
}

impl Session {
    /// Requests a hint, advancing the two-phase flow.
    ///
    /// Every outcome that gives the player information (a proposal, a
    /// commit, or a reveal) increments the help counter; asking on a
    /// complete board does not.
    ///
    /// Committed eliminations are appended to the removal log, so they
    /// survive [`recompute_candidates`](Session::recompute_candidates).
    pub fn request_hint(&mut self) -> HintOutcome {
        if let Some(finding) = self.pending_hint.take() {
            self.help_counter += 1;
            finding.deduction.apply(&mut self.current);
            if let Deduction::Eliminations(eliminations) = &finding.deduction {
                for (&pos, &digits) in eliminations.removals() {
                    self.removed_candidates.push((pos, digits));
                }
            }
            return HintOutcome::Applied(finding);
        }

        if self.current.is_complete() {
            return HintOutcome::Complete;
        }

        if let Some(finding) = find_deduction(&self.current) {
            self.help_counter += 1;
            self.pending_hint = Some(finding.clone());
            return HintOutcome::Proposed(finding);
        }

        let reveals: Vec<(Position, Digit)> = self
            .current
            .empty_positions()
            .into_iter()
            .filter_map(|pos| self.solved.value(pos).map(|digit| (pos, digit)))
            .collect();
        if let Some(&(position, digit)) = reveals.choose(&mut self.rng) {
            self.help_counter += 1;
            self.current.set_value(position, Some(digit));
            return HintOutcome::Revealed { position, digit };
        }

        // Unreachable while the solved grid is complete, which the
        // constructors guarantee.
        HintOutcome::Complete
    }
}
