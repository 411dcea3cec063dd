//! Board position representation.

use std::fmt::{self, Display};

/// A 0-indexed `(row, col)` coordinate on the 9x9 board.
///
/// # Examples
///
/// ```
/// use ninegrid_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
///
/// // All 81 positions in row-major order
/// assert_eq!(Position::ALL[0], Position::new(0, 0));
/// assert_eq!(Position::ALL[80], Position::new(8, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    ///
    /// This is the canonical scan order: candidate-cell selection in the
    /// solver breaks ties by taking the first maximum in this order.
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

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        3 * (self.row / 3) + self.col / 3
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.cell_index(), i);
        }
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[10], Position::new(1, 1));
    }

    #[test]
    fn test_box_index() {
        let expected: [[u8; 9]; 9] = [
            [0, 0, 0, 1, 1, 1, 2, 2, 2],
            [0, 0, 0, 1, 1, 1, 2, 2, 2],
            [0, 0, 0, 1, 1, 1, 2, 2, 2],
            [3, 3, 3, 4, 4, 4, 5, 5, 5],
            [3, 3, 3, 4, 4, 4, 5, 5, 5],
            [3, 3, 3, 4, 4, 4, 5, 5, 5],
            [6, 6, 6, 7, 7, 7, 8, 8, 8],
            [6, 6, 6, 7, 7, 7, 8, 8, 8],
            [6, 6, 6, 7, 7, 7, 8, 8, 8],
        ];
        for row in 0..9 {
            for col in 0..9 {
                let pos = Position::new(row, col);
                assert_eq!(pos.box_index(), expected[row as usize][col as usize]);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(3, 8)), "(3, 8)");
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }
}
