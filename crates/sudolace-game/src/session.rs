//! A puzzle in play.

use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use sudolace_core::{Board, Digit, DigitSet, Position};
use sudolace_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator};
use sudolace_solver::Finding;

use crate::{BoardSnapshot, HistoryError, HistorySnapshot};

/// A game session: one puzzle, one player, exclusive ownership.
///
/// The session keeps three grids. `solved` is the completed grid, `original`
/// is the puzzle as dealt, and `current` is the player's grid. Solving and
/// resetting are plain copies between them; no search runs after
/// construction.
///
/// Candidate removals (from committed hints and from
/// [`remove_candidates`](Session::remove_candidates)) are kept in a replay
/// log so that [`recompute_candidates`](Session::recompute_candidates) can
/// rebuild annotations from occupancy without losing the player's earned
/// eliminations.
///
/// # Examples
///
/// ```
/// use sudolace_core::Position;
/// use sudolace_generator::{Difficulty, PuzzleGenerator};
/// use sudolace_game::Session;
///
/// let puzzle = PuzzleGenerator::from_seed(1).generate(Difficulty::Easy);
/// let mut session = Session::from_puzzle(puzzle);
///
/// session.solve();
/// assert!(session.is_correct());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) solved: Board,
    pub(crate) original: Board,
    pub(crate) current: Board,
    pub(crate) difficulty: Difficulty,
    pub(crate) help_counter: u32,
    pub(crate) removed_candidates: Vec<(Position, DigitSet)>,
    pub(crate) pending_hint: Option<Finding>,
    pub(crate) rng: Pcg64Mcg,
}

impl Session {
    /// Generates a fresh puzzle of the given grade and starts a session on
    /// it.
    #[must_use]
    pub fn new_generated(difficulty: Difficulty) -> Self {
        Self::from_puzzle(PuzzleGenerator::new().generate(difficulty))
    }

    /// Starts a session on an already generated puzzle.
    #[must_use]
    pub fn from_puzzle(puzzle: GeneratedPuzzle) -> Self {
        Self {
            solved: puzzle.solution,
            original: puzzle.puzzle.clone(),
            current: puzzle.puzzle,
            difficulty: puzzle.difficulty,
            help_counter: 0,
            removed_candidates: Vec::new(),
            pending_hint: None,
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Restores a session from a saved snapshot.
    ///
    /// The player's grid starts over from the original; only the boards,
    /// not the in-progress state, survive a snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError`] if the difficulty label is unknown,
    /// either board fails validation, or the stored solution is not a
    /// solved grid.
    pub fn from_history(snapshot: &HistorySnapshot) -> Result<Self, HistoryError> {
        let difficulty: Difficulty = snapshot.difficulty.parse()?;
        let solved = snapshot.solved.to_board()?;
        if !solved.is_solved() {
            return Err(HistoryError::UnsolvedSolution);
        }
        let original = snapshot.original.to_board()?;
        Ok(Self {
            solved,
            current: original.clone(),
            original,
            difficulty,
            help_counter: 0,
            removed_candidates: Vec::new(),
            pending_hint: None,
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        })
    }

    /// Freezes the session's boards for persistence.
    #[must_use]
    pub fn snapshot(&self, elapsed_seconds: u64) -> HistorySnapshot {
        HistorySnapshot {
            original: BoardSnapshot::from_board(&self.original),
            solved: BoardSnapshot::from_board(&self.solved),
            elapsed_seconds,
            difficulty: self.difficulty.to_string(),
        }
    }

    /// Returns the player's grid.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Returns the puzzle as dealt.
    #[must_use]
    pub fn original(&self) -> &Board {
        &self.original
    }

    /// Returns the solved grid.
    #[must_use]
    pub fn solved(&self) -> &Board {
        &self.solved
    }

    /// Returns the session's difficulty grade.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns how many hints the player has taken.
    #[must_use]
    pub fn help_counter(&self) -> u32 {
        self.help_counter
    }

    /// Enters a player value and reports whether it respects the row,
    /// column, and box constraints.
    ///
    /// `0` clears the cell and counts as valid. `1`-`9` always lands on the
    /// grid, valid or not, so a UI can show the conflict the player just
    /// created. Anything above `9` is rejected without touching the grid.
    pub fn set_value(&mut self, pos: Position, value: u8) -> bool {
        self.pending_hint = None;
        if value == 0 {
            self.current.set_value(pos, None);
            return true;
        }
        let Some(digit) = Digit::from_value(value) else {
            return false;
        };
        let valid = self.current.is_value_valid(pos, digit);
        self.current.set_value(pos, Some(digit));
        valid
    }

    /// Replaces the candidate notes of a cell, clearing any value in it.
    pub fn set_candidates(&mut self, pos: Position, candidates: DigitSet) {
        self.pending_hint = None;
        self.current.set_candidates(pos, candidates);
    }

    /// Removes candidate notes from a cell and records the removal in the
    /// replay log.
    pub fn remove_candidates(&mut self, pos: Position, digits: DigitSet) {
        self.pending_hint = None;
        self.current.remove_candidates(pos, digits);
        self.removed_candidates.push((pos, digits));
    }

    /// Rebuilds every empty cell's candidates from occupancy, then replays
    /// the logged removals.
    pub fn recompute_candidates(&mut self) {
        self.current.recompute_candidates();
        for &(pos, digits) in &self.removed_candidates {
            if self.current[pos].is_empty() {
                self.current.remove_candidates(pos, digits);
            }
        }
    }

    /// Returns `true` if every cell of the player's grid is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    /// Returns `true` if the player's grid matches the solved grid exactly.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self.current.value(pos) == self.solved.value(pos))
    }

    /// Returns the filled cells whose value disagrees with the solution.
    ///
    /// Empty cells are neither correct nor incorrect.
    #[must_use]
    pub fn incorrect_values(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| {
                self.current.value(pos).is_some()
                    && self.current.value(pos) != self.solved.value(pos)
            })
            .collect()
    }

    /// Fills the player's grid from the solved grid.
    ///
    /// A plain copy; calling it again changes nothing.
    pub fn solve(&mut self) {
        self.pending_hint = None;
        self.current = self.solved.clone();
    }

    /// Restores the puzzle as dealt and forgets the session's progress:
    /// the help counter, the removal log, and any pending hint.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        self.help_counter = 0;
        self.removed_candidates.clear();
        self.pending_hint = None;
    }
}
