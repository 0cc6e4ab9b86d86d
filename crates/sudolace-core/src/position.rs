//! Board position types.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board, identified by row and column (0-8).
///
/// Positions map to a flat row-major index 0-80, which is how the board
/// stores its cells.
///
/// # Examples
///
/// ```
/// use sudolace_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 4 * 9 + 7);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a flat row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / 9) as u8, (index % 9) as u8);
        Self { row, col }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, left to right, top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self {
            row: (box_index / 3) * 3 + cell / 3,
            col: (box_index % 3) * 3 + cell % 3,
        }
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the flat row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3×3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the 20 peers of this position: every other cell sharing its
    /// row, column, or box.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudolace_core::Position;
    ///
    /// let peers = Position::new(0, 0).peers();
    /// assert_eq!(peers.len(), 20);
    /// assert!(peers.contains(&Position::new(0, 8)));
    /// assert!(peers.contains(&Position::new(8, 0)));
    /// assert!(peers.contains(&Position::new(2, 2)));
    /// assert!(!peers.contains(&Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn peers(self) -> [Self; 20] {
        let mut peers = [Self { row: 0, col: 0 }; 20];
        let mut n = 0;
        for other in Self::ALL {
            if other != self
                && (other.row == self.row
                    || other.col == self.col
                    || other.box_index() == self.box_index())
            {
                peers[n] = other;
                n += 1;
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), *pos);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 5).box_index(), 1);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
        assert_eq!(Position::new(6, 2).box_index(), 6);
    }

    #[test]
    fn test_from_box() {
        assert_eq!(Position::from_box(0, 0), Position::new(0, 0));
        assert_eq!(Position::from_box(0, 8), Position::new(2, 2));
        assert_eq!(Position::from_box(4, 4), Position::new(4, 4));
        assert_eq!(Position::from_box(8, 0), Position::new(6, 6));

        // from_box agrees with box_index
        for box_index in 0..9 {
            for cell in 0..9 {
                assert_eq!(Position::from_box(box_index, cell).box_index(), box_index);
            }
        }
    }

    #[test]
    fn test_peers() {
        let peers = Position::new(4, 4).peers();
        assert_eq!(peers.len(), 20);
        // Row, column, and box peers are all present
        assert!(peers.contains(&Position::new(4, 0)));
        assert!(peers.contains(&Position::new(0, 4)));
        assert!(peers.contains(&Position::new(3, 3)));
        // The cell itself is not its own peer
        assert!(!peers.contains(&Position::new(4, 4)));
        // Peers are distinct
        for (i, a) in peers.iter().enumerate() {
            for b in &peers[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(0, 0)), "r1c1");
        assert_eq!(format!("{}", Position::new(8, 8)), "r9c9");
    }
}
