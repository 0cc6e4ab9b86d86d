use sudolace_core::{Board, Digit, DigitSet, House, Position};

use crate::{Deduction, Eliminations, technique::Technique};

const NAME: &str = "Hidden Pair";

/// A technique that finds two digits confined to the same two cells of a
/// house.
///
/// When a house offers exactly two homes for each of two digits and those
/// homes coincide, the two cells must hold exactly those digits, so every
/// other candidate in them can be removed. Pairs already pared down to the
/// two digits yield no removal and are not reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenPair {}

impl HiddenPair {
    /// Creates a new `HiddenPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

fn digit_homes(board: &Board, house: House, digit: Digit) -> Vec<Position> {
    house
        .positions()
        .into_iter()
        .filter(|&pos| board[pos].is_empty() && board.candidates(pos).contains(digit))
        .collect()
}

impl Technique for HiddenPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn find(&self, board: &Board) -> Option<Deduction> {
        let mut eliminations = Eliminations::new();
        for house in House::ALL {
            for (i, &d1) in Digit::ALL.iter().enumerate() {
                let homes = digit_homes(board, house, d1);
                let [a, b] = homes[..] else {
                    continue;
                };
                for &d2 in &Digit::ALL[i + 1..] {
                    if digit_homes(board, house, d2) != homes {
                        continue;
                    }
                    let pair = DigitSet::from_iter([d1, d2]);
                    let extra_a = board.candidates(a).difference(pair);
                    let extra_b = board.candidates(b).difference(pair);
                    if extra_a.is_empty() && extra_b.is_empty() {
                        continue;
                    }
                    eliminations.add_pair(a, b);
                    eliminations.add_removal(a, extra_a);
                    eliminations.add_removal(b, extra_b);
                }
            }
        }
        (!eliminations.is_empty()).then_some(Deduction::Eliminations(eliminations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_pair_in_row() {
        let mut board = Board::new();
        // 1 and 2 can only live at (0, 0) and (0, 1) in row 0
        board.set_candidates(
            Position::new(0, 0),
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D5]),
        );
        board.set_candidates(
            Position::new(0, 1),
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D6]),
        );
        board.set_candidates(
            Position::new(0, 5),
            DigitSet::from_iter([Digit::D5, Digit::D6]),
        );

        let Some(Deduction::Eliminations(eliminations)) = HiddenPair::new().find(&board) else {
            panic!("expected eliminations");
        };
        assert_eq!(
            eliminations.removals()[&Position::new(0, 0)],
            DigitSet::from_elem(Digit::D5)
        );
        assert_eq!(
            eliminations.removals()[&Position::new(0, 1)],
            DigitSet::from_elem(Digit::D6)
        );

        let mut board = board;
        Deduction::Eliminations(eliminations).apply(&mut board);
        assert_eq!(
            board.candidates(Position::new(0, 0)),
            DigitSet::from_iter([Digit::D1, Digit::D2])
        );
        assert_eq!(
            board.candidates(Position::new(0, 1)),
            DigitSet::from_iter([Digit::D1, Digit::D2])
        );
    }

    #[test]
    fn test_bare_pair_yields_nothing() {
        let mut board = Board::new();
        // The two digits are confined to two cells that hold nothing else,
        // so there is nothing to remove
        board.set_candidates(
            Position::new(3, 3),
            DigitSet::from_iter([Digit::D4, Digit::D7]),
        );
        board.set_candidates(
            Position::new(3, 4),
            DigitSet::from_iter([Digit::D4, Digit::D7]),
        );
        assert!(HiddenPair::new().find(&board).is_none());
    }

    #[test]
    fn test_three_homes_is_not_a_pair() {
        let mut board = Board::new();
        board.set_candidates(
            Position::new(0, 0),
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D5]),
        );
        board.set_candidates(
            Position::new(0, 1),
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D6]),
        );
        board.set_candidates(
            Position::new(0, 2),
            DigitSet::from_iter([Digit::D1, Digit::D2]),
        );
        assert!(HiddenPair::new().find(&board).is_none());
    }
}
