//! Rows, columns, and boxes as a tagged enum.

use std::fmt::{self, Display};

use crate::Position;

/// A sudoku house: a row, column, or 3×3 box.
///
/// Constraint scans dispatch on the variant instead of on strings or
/// parallel code paths, so adding a house kind would be a compile-checked
/// change.
///
/// # Examples
///
/// ```
/// use sudolace_core::{House, Position};
///
/// let row = House::Row(3);
/// assert_eq!(row.cell(0), Position::new(3, 0));
/// assert!(row.positions().iter().all(|p| p.row() == 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum House {
    /// A row identified by its row coordinate (0-8).
    Row(u8),
    /// A column identified by its column coordinate (0-8).
    Column(u8),
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box(u8),
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row(i as u8);
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column(i as u8);
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box(i as u8);
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    ///
    /// Scans that stop at the first match inherit this ordering, so rows win
    /// ties over columns, and columns over boxes.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Box(i as u8);
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn cell(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row(row) => Position::new(row, i),
            House::Column(col) => Position::new(i, col),
            House::Box(index) => Position::from_box(index, i),
        }
    }

    /// Returns all nine positions contained in this house.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, pos) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            {
                *pos = self.cell(i as u8);
            }
        }
        positions
    }

    /// Returns `true` if this house contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            House::Row(row) => pos.row() == row,
            House::Column(col) => pos.col() == col,
            House::Box(index) => pos.box_index() == index,
        }
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row(row) => write!(f, "row {}", row + 1),
            House::Column(col) => write!(f, "column {}", col + 1),
            House::Box(index) => write!(f, "box {}", index + 1),
        }
    }
}
