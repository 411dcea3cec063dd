//! A parsed 9x9 clue grid and its text format.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// Error for a malformed puzzle source (wrong dimensions or an invalid
/// character).
///
/// Raised at the loader boundary, before the board or the solver ever see
/// the puzzle. Line numbers are 1-based, matching what an editor shows.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The source has more than 9 rows.
    #[display("too many rows")]
    TooManyRows,
    /// The source has fewer than 9 rows.
    #[display("not enough rows: found {found}")]
    NotEnoughRows {
        /// Number of rows found.
        found: usize,
    },
    /// A row is not exactly 9 cells of digits and blank markers.
    #[display("invalid row {line}: {text:?}")]
    InvalidRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// The offending row text.
        text: String,
    },
}

/// An ordered 9x9 grid of optional digits: the puzzle definition handed to
/// the board.
///
/// # Text format
///
/// Exactly 9 lines of exactly 9 cells. A cell is a digit `1`-`9` or a
/// blank marker: space, `.`, `_`, or `0`.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "\
/// 53..7....
/// 6..195...
/// .98....6.
/// 8...6...3
/// 4..8.3..1
/// 7...2...6
/// .6....28.
/// ...419..5
/// ....8..79"
///     .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert_eq!(grid.clues().count(), 30);
/// # Ok::<(), ninegrid_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid([Option<Digit>; 81]);

impl DigitGrid {
    /// Creates an empty grid (no clues).
    #[must_use]
    pub const fn empty() -> Self {
        Self([None; 81])
    }

    /// Sets the cell at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.0[pos.cell_index()] = digit;
    }

    /// Returns the clues in row-major order.
    ///
    /// This is the order in which [`Board::from_grid`] assigns them.
    ///
    /// [`Board::from_grid`]: crate::Board::from_grid
    pub fn clues(&self) -> impl Iterator<Item = (Position, Digit)> {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self[pos].map(|digit| (pos, digit)))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.0[pos.cell_index()]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::empty();
        let mut rows = 0_usize;
        for (i, line) in s.lines().enumerate() {
            if i >= 9 {
                return Err(ParseGridError::TooManyRows);
            }
            parse_row(&mut grid, i, line)?;
            rows = i + 1;
        }
        if rows < 9 {
            return Err(ParseGridError::NotEnoughRows { found: rows });
        }
        Ok(grid)
    }
}

fn parse_row(grid: &mut DigitGrid, row: usize, line: &str) -> Result<(), ParseGridError> {
    let invalid = || ParseGridError::InvalidRow {
        line: row + 1,
        text: line.to_owned(),
    };

    let mut cols = 0_usize;
    for (col, c) in line.chars().enumerate() {
        if col >= 9 {
            return Err(invalid());
        }
        let cell = match c {
            ' ' | '.' | '_' | '0' => None,
            _ => Some(Digit::from_char(c).ok_or_else(invalid)?),
        };
        #[expect(clippy::cast_possible_truncation)]
        grid.set(Position::new(row as u8, col as u8), cell);
        cols = col + 1;
    }
    if cols != 9 {
        return Err(invalid());
    }
    Ok(())
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                match self[Position::new(row, col)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
            if row < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
