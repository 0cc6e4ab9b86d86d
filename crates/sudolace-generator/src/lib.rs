//! Puzzle generation for the Sudolace puzzle engine.
//!
//! Generation runs in two phases:
//!
//! 1. **Solution**: the three diagonal boxes are filled with independent
//!    random permutations (they share no row or column, so any combination
//!    is consistent), then backtracking completes the rest of the grid.
//! 2. **Digging**: digits are removed one at a time in a shuffled order,
//!    keeping each removal only while the puzzle still has exactly one
//!    solution. Once a removal breaks uniqueness it would also break it on
//!    any emptier board, so a single pass over all 81 cells is exhaustive
//!    and the process always terminates.
//!
//! # Examples
//!
//! ```
//! use sudolace_generator::{Difficulty, PuzzleGenerator};
//!
//! let mut generator = PuzzleGenerator::from_seed(42);
//! let generated = generator.generate(Difficulty::Easy);
//!
//! assert!(generated.solution.is_solved());
//! assert_eq!(generated.removed_cells(), 36);
//! ```

mod difficulty;

use log::warn;
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;
use sudolace_core::{Board, Digit, Position};
use sudolace_solver::backtrack;

pub use self::difficulty::{Difficulty, ParseDifficultyError};

/// A generated puzzle together with its solution and grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The completed grid.
    pub solution: Board,
    /// The puzzle with digits removed and candidates computed for every
    /// empty cell.
    pub puzzle: Board,
    /// The grade the puzzle was generated for.
    pub difficulty: Difficulty,
}

impl GeneratedPuzzle {
    /// Returns how many cells were actually emptied.
    ///
    /// Usually equal to the grade's removal count; may be lower if digging
    /// ran out of removable cells.
    #[must_use]
    pub fn removed_cells(&self) -> usize {
        self.puzzle.empty_positions().len()
    }
}

/// A random puzzle generator.
///
/// Owns its RNG so that a seeded generator yields a reproducible sequence
/// of puzzles.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
}

impl PuzzleGenerator {
    /// Creates a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Generates a puzzle of the given grade.
    ///
    /// The returned puzzle has a unique solution, agrees with `solution` on
    /// every filled cell, and carries fresh candidate annotations on every
    /// empty cell.
    pub fn generate(&mut self, difficulty: Difficulty) -> GeneratedPuzzle {
        let solution = self.generate_solution();
        let mut puzzle = solution.clone();
        self.remove_digits(&mut puzzle, difficulty.removal_count());
        puzzle.recompute_candidates();
        GeneratedPuzzle {
            solution,
            puzzle,
            difficulty,
        }
    }

    fn generate_solution(&mut self) -> Board {
        loop {
            let mut board = Board::new();
            self.fill_diagonal(&mut board);
            if backtrack::complete(&mut board) {
                return board;
            }
            // Diagonal boxes never constrain each other, so completion
            // should not fail; reseed rather than trust that reasoning.
            warn!("diagonal seeding could not be completed, reseeding");
        }
    }

    fn fill_diagonal(&mut self, board: &mut Board) {
        for box_index in [0, 4, 8] {
            let mut digits = Digit::ALL;
            digits.shuffle(&mut self.rng);
            for (cell, digit) in (0u8..).zip(digits) {
                board.set_value(Position::from_box(box_index, cell), Some(digit));
            }
        }
    }

    fn remove_digits(&mut self, board: &mut Board, target: usize) {
        let mut order = Position::ALL;
        order.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in order {
            if removed == target {
                break;
            }
            let Some(digit) = board.value(pos) else {
                continue;
            };
            board.set_value(pos, None);
            if backtrack::has_unique_solution(board) {
                removed += 1;
            } else {
                board.set_value(pos, Some(digit));
            }
        }
        if removed < target {
            warn!("removed {removed} of {target} digits before uniqueness ran out");
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sudolace_core::DigitSet;

    use super::*;

    #[test]
    fn test_generated_solution_is_solved() {
        let mut generator = PuzzleGenerator::from_seed(1);
        let generated = generator.generate(Difficulty::Easy);
        assert!(generated.solution.is_solved());
    }

    #[test]
    fn test_removal_count_matches_grade() {
        for difficulty in Difficulty::ALL {
            let mut generator = PuzzleGenerator::from_seed(7);
            let generated = generator.generate(difficulty);
            assert_eq!(generated.removed_cells(), difficulty.removal_count());
            assert_eq!(generated.difficulty, difficulty);
        }
    }

    #[test]
    fn test_puzzle_agrees_with_solution() {
        let mut generator = PuzzleGenerator::from_seed(2);
        let generated = generator.generate(Difficulty::Medium);
        for pos in Position::ALL {
            if let Some(digit) = generated.puzzle.value(pos) {
                assert_eq!(generated.solution.value(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_puzzle_has_unique_solution() {
        let mut generator = PuzzleGenerator::from_seed(3);
        let generated = generator.generate(Difficulty::Hard);
        assert!(backtrack::has_unique_solution(&generated.puzzle));
    }

    #[test]
    fn test_candidates_match_occupancy() {
        let mut generator = PuzzleGenerator::from_seed(4);
        let generated = generator.generate(Difficulty::Easy);
        for pos in Position::ALL {
            if generated.puzzle[pos].is_empty() {
                assert_eq!(
                    generated.puzzle.candidates(pos),
                    generated.puzzle.possible_values(pos)
                );
            } else {
                assert_eq!(generated.puzzle.candidates(pos), DigitSet::EMPTY);
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = PuzzleGenerator::from_seed(5).generate(Difficulty::Easy);
        let b = PuzzleGenerator::from_seed(5).generate(Difficulty::Easy);
        assert_eq!(a, b);

        let c = PuzzleGenerator::from_seed(6).generate(Difficulty::Easy);
        assert_ne!(a.puzzle, c.puzzle);
    }

    #[test]
    fn test_generator_yields_distinct_puzzles() {
        let mut generator = PuzzleGenerator::from_seed(8);
        let a = generator.generate(Difficulty::Easy);
        let b = generator.generate(Difficulty::Easy);
        assert_ne!(a.puzzle, b.puzzle);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn test_generation_invariants_hold_for_any_seed(seed: u64) {
            let mut generator = PuzzleGenerator::from_seed(seed);
            let generated = generator.generate(Difficulty::Easy);
            prop_assert!(generated.solution.is_solved());
            prop_assert!(backtrack::has_unique_solution(&generated.puzzle));
        }
    }
}
