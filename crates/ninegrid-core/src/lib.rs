//! Core data structures for the ninegrid sudoku solver.
//!
//! This crate provides the constraint-tracking board model that the
//! backtracking solver in `ninegrid-solver` drives, plus the small value
//! types it is built from.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Sets of digits backed by a bitmask, iterated in
//!   ascending digit order
//! - [`position`]: 0-indexed `(row, col)` board coordinates
//! - [`house`]: Rows, columns, and 3x3 boxes as named units
//! - [`digit_grid`]: A parsed 9x9 clue grid with its text format
//! - [`board`]: The board itself, with per-unit used-value sets,
//!   assignment/retraction, and the forward-checking probe
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.assign(Position::new(0, 0), Digit::D5);
//!
//! // 5 is now ruled out for the rest of row 0
//! let candidates = board.possible_values(Position::new(0, 8));
//! assert!(!candidates.contains(Digit::D5));
//! assert_eq!(board.free_count(), 80);
//! ```

pub mod board;
pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod house;
pub mod position;

pub use self::{
    board::{Board, ConflictError},
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    house::House,
    position::Position,
};
