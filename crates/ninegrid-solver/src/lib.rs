//! Backtracking search for the ninegrid sudoku solver.
//!
//! The search is exhaustive depth-first backtracking over a
//! [`ninegrid_core::Board`], augmented with two classic pruning devices:
//!
//! - a **most-constrained-cell heuristic**: each step branches on the
//!   empty cell with the most digits already forbidden, shrinking the
//!   branching factor early;
//! - **forward checking**: each candidate is probed with
//!   [`Board::look_ahead`](ninegrid_core::Board::look_ahead) and dropped
//!   if it would strand some other empty cell with no legal value.
//!
//! No human-style techniques (naked pairs, X-wings, ...) are attempted.
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{Board, DigitGrid};
//! use ninegrid_solver::BacktrackSolver;
//!
//! let grid: DigitGrid = "\
//! 53..7....
//! 6..195...
//! .98....6.
//! 8...6...3
//! 4..8.3..1
//! 7...2...6
//! .6....28.
//! ...419..5
//! ....8..79"
//!     .parse()?;
//! let board = Board::from_grid(&grid)?;
//!
//! let mut solver = BacktrackSolver::new(board);
//! assert!(solver.solve()?);
//! assert!(solver.board().is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack_solver::*, observer::*};

mod backtrack_solver;
mod observer;
