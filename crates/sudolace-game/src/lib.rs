//! Game session management for the Sudolace puzzle engine.
//!
//! A [`Session`] owns a puzzle in play: the solved grid, the pristine
//! starting grid, and the grid as the player has it now. It verifies
//! player input, replays candidate removals across recomputes, and drives
//! the two-phase hint flow ([`Session::request_hint`]).
//!
//! [`HistorySnapshot`] is the serializable boundary for finished or
//! suspended games; it restores into a fresh session with
//! [`Session::from_history`].

pub mod hint;
pub mod history;
pub mod session;

pub use self::{
    hint::HintOutcome,
    history::{BoardSnapshot, HistoryError, HistorySnapshot},
    session::Session,
};
