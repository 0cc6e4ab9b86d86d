//! Solving and deduction for the Sudolace puzzle engine.
//!
//! Two layers live here:
//!
//! - [`backtrack`]: exhaustive depth-first search, used to complete boards
//!   and to decide solution uniqueness during generation.
//! - [`technique`]: human-style deduction techniques (full house, naked and
//!   hidden singles, naked and hidden pairs) that power the hint system.
//!   Each technique inspects a board and reports a [`Deduction`] without
//!   mutating anything; applying a deduction is a separate, explicit step.
//!
//! # Examples
//!
//! ```
//! use sudolace_core::Board;
//! use sudolace_solver::backtrack;
//!
//! let mut board = Board::new();
//! assert!(backtrack::complete(&mut board));
//! assert!(board.is_solved());
//! ```

pub mod backtrack;
pub mod deduction;
pub mod technique;

pub use self::{
    deduction::{Deduction, Eliminations, Placement},
    technique::{Finding, Technique, all_techniques, find_deduction},
};
