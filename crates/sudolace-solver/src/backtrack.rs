//! Exhaustive depth-first search over board completions.
//!
//! These routines ignore candidate annotations entirely and work from cell
//! occupancy alone, so they give the same answer whether or not candidates
//! are up to date.

use sudolace_core::{Board, Digit};

/// Fills every empty cell in place, trying digits in ascending order at the
/// first empty cell in row-major order.
///
/// Returns `true` on success. On failure the board is left as it was
/// (every tentative placement is undone on the way out).
///
/// # Examples
///
/// ```
/// use sudolace_core::Board;
/// use sudolace_solver::backtrack;
///
/// let mut board = Board::new();
/// assert!(backtrack::complete(&mut board));
/// assert!(board.is_solved());
/// ```
pub fn complete(board: &mut Board) -> bool {
    let Some(pos) = board.first_empty_position() else {
        return true;
    };
    for digit in Digit::ALL {
        if board.is_value_valid(pos, digit) {
            board.set_value(pos, Some(digit));
            if complete(board) {
                return true;
            }
            board.set_value(pos, None);
        }
    }
    false
}

/// Counts complete valid assignments of the board, stopping early once the
/// count reaches `limit`.
///
/// The search works on a private copy; the input board is untouched. Each
/// call is a fresh search with no memoization.
#[must_use]
pub fn count_solutions(board: &Board, limit: usize) -> usize {
    let mut scratch = board.clone();
    count_rec(&mut scratch, limit)
}

fn count_rec(board: &mut Board, limit: usize) -> usize {
    let Some(pos) = board.first_empty_position() else {
        return 1;
    };
    let mut count = 0;
    for digit in Digit::ALL {
        if board.is_value_valid(pos, digit) {
            board.set_value(pos, Some(digit));
            count += count_rec(board, limit - count);
            board.set_value(pos, None);
            if count >= limit {
                break;
            }
        }
    }
    count
}

/// Returns `true` if the board has exactly one completion.
///
/// This is the oracle the generator consults after every tentative digit
/// removal: a puzzle is only kept while this holds.
#[must_use]
pub fn has_unique_solution(board: &Board) -> bool {
    count_solutions(board, 2) == 1
}

#[cfg(test)]
mod tests {
    use sudolace_core::Position;

    use super::*;

    fn solved_values() -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for (r, row) in values.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                {
                    *value = ((r * 3 + r / 3 + c) % 9 + 1) as u8;
                }
            }
        }
        values
    }

    #[test]
    fn test_complete_empty_board() {
        let mut board = Board::new();
        assert!(complete(&mut board));
        assert!(board.is_solved());
    }

    #[test]
    fn test_complete_respects_givens() {
        let mut board = Board::new();
        board.set_value(Position::new(0, 0), Some(Digit::D7));
        board.set_value(Position::new(8, 8), Some(Digit::D2));
        assert!(complete(&mut board));
        assert!(board.is_solved());
        assert_eq!(board.value(Position::new(0, 0)), Some(Digit::D7));
        assert_eq!(board.value(Position::new(8, 8)), Some(Digit::D2));
    }

    #[test]
    fn test_complete_fails_on_contradiction() {
        let mut board = Board::new();
        // Two equal digits in one row make completion impossible
        board.set_value(Position::new(0, 0), Some(Digit::D1));
        board.set_value(Position::new(0, 5), Some(Digit::D1));
        let before = board.clone();
        assert!(!complete(&mut board));
        // Failure leaves the board untouched
        assert_eq!(board, before);
    }

    #[test]
    fn test_count_solutions_solved_board() {
        let board = Board::from_values(&solved_values());
        assert_eq!(count_solutions(&board, 2), 1);
        assert!(has_unique_solution(&board));
    }

    #[test]
    fn test_count_solutions_limit() {
        let board = Board::new();
        // An empty board has a huge number of completions; the limit caps
        // the search
        assert_eq!(count_solutions(&board, 2), 2);
        assert_eq!(count_solutions(&board, 5), 5);
        assert!(!has_unique_solution(&board));
    }

    #[test]
    fn test_count_solutions_zero_on_contradiction() {
        let mut board = Board::new();
        board.set_value(Position::new(0, 0), Some(Digit::D1));
        board.set_value(Position::new(0, 5), Some(Digit::D1));
        assert_eq!(count_solutions(&board, 2), 0);
        assert!(!has_unique_solution(&board));
    }

    #[test]
    fn test_single_missing_cell_is_unique() {
        let mut board = Board::from_values(&solved_values());
        board.set_value(Position::new(4, 4), None);
        assert!(has_unique_solution(&board));
    }

    #[test]
    fn test_input_board_untouched_by_count() {
        let mut board = Board::from_values(&solved_values());
        board.set_value(Position::new(4, 4), None);
        let before = board.clone();
        let _ = count_solutions(&board, 2);
        assert_eq!(board, before);
    }
}
