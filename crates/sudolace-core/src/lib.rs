//! Core data structures for the Sudolace puzzle engine.
//!
//! This crate provides the fundamental types shared by the solving,
//! generation, and session-management crates:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Bitset of candidate digits for a single cell
//! - [`position`]: Board coordinates with row/column/box arithmetic
//! - [`house`]: Rows, columns, and 3×3 boxes as a tagged enum
//! - [`cell`]: A cell holding either a value or a candidate set
//! - [`board`]: The 9×9 board with constraint queries
//!
//! # Examples
//!
//! ```
//! use sudolace_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.set_value(Position::new(4, 4), Some(Digit::D5));
//!
//! // 5 is no longer a valid entry elsewhere in row 4
//! assert!(!board.is_value_valid(Position::new(4, 7), Digit::D5));
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;

pub use self::{
    board::Board, cell::Cell, digit::Digit, digit_set::DigitSet, house::House, position::Position,
};
