//! Plain-stdout rendering of the board.
//!
//! The solver reports every assignment and retraction through
//! [`SolveObserver`]; without cursor addressing there is nothing useful to
//! repaint per cell, so those notifications are left to the solver's trace
//! log and only full frames are printed here.

use std::fmt::Write as _;

use ninegrid_core::{Board, Position};
use ninegrid_solver::SolveObserver;

/// Formats the board as a framed grid with 3x3 band separators.
///
/// Empty cells render as spaces.
pub fn format_board(board: &Board) -> String {
    const SEPARATOR: &str = "+-------+-------+-------+";

    let mut out = String::new();
    for row in 0..9 {
        if row % 3 == 0 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        for col in 0..9 {
            if col % 3 == 0 {
                out.push_str("| ");
            }
            match board.get(Position::new(row, col)) {
                Some(digit) => {
                    let _ = write!(out, "{digit} ");
                }
                None => out.push_str("  "),
            }
        }
        out.push_str("|\n");
    }
    out.push_str(SEPARATOR);
    out
}

/// Observer that prints a full `SOLUTION` frame when the search finishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermRenderer;

impl TermRenderer {
    /// Creates a renderer writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SolveObserver for TermRenderer {
    fn frame(&mut self, board: &Board) {
        println!("\nSOLUTION");
        println!("{}", format_board(board));
    }
}
