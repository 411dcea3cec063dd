//! Sudoku units: rows, columns, and boxes.

use std::fmt::{self, Display};

use crate::position::Position;

/// A sudoku house (row, column, or 3x3 box): a group of 9 cells that must
/// contain each digit at most once.
///
/// Conflict reporting uses this to name the unit a duplicate clue violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row(u8),
    /// A column identified by its column index (0-8).
    Column(u8),
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box(u8),
}

impl House {
    /// Returns the three houses containing `pos`: its row, column, and box.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row(pos.row()),
            Self::Column(pos.col()),
            Self::Box(pos.box_index()),
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row(row) => Position::new(row, i),
            Self::Column(col) => Position::new(i, col),
            Self::Box(index) => {
                Position::new(3 * (index / 3) + i / 3, 3 * (index % 3) + i % 3)
            }
        }
    }

    /// Returns an iterator over the 9 positions of this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row {row}"),
            Self::Column(col) => write!(f, "column {col}"),
            Self::Box(index) => write!(f, "box {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        let [row, col, boxh] = House::of(Position::new(4, 7));
        assert_eq!(row, House::Row(4));
        assert_eq!(col, House::Column(7));
        assert_eq!(boxh, House::Box(5));
    }

    #[test]
    fn test_row_positions() {
        let positions: Vec<_> = House::Row(2).positions().collect();
        assert_eq!(positions.len(), 9);
        for (col, pos) in (0..).zip(&positions) {
            assert_eq!(*pos, Position::new(2, col));
        }
    }

    #[test]
    fn test_column_positions() {
        let positions: Vec<_> = House::Column(5).positions().collect();
        for (row, pos) in (0..).zip(&positions) {
            assert_eq!(*pos, Position::new(row, 5));
        }
    }

    #[test]
    fn test_box_positions() {
        // box 4 is the center box, rows 3-5 x cols 3-5
        let positions: Vec<_> = House::Box(4).positions().collect();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[4], Position::new(4, 4));
        assert_eq!(positions[8], Position::new(5, 5));
        for pos in positions {
            assert_eq!(pos.box_index(), 4);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", House::Row(3)), "row 3");
        assert_eq!(format!("{}", House::Column(0)), "column 0");
        assert_eq!(format!("{}", House::Box(8)), "box 8");
    }
}
