//! The rendering seam between the search and a display.

use ninegrid_core::{Board, Digit, Position};

/// Receiver for board-mutation notifications during the search.
///
/// The solver calls these hooks synchronously and in program order, at the
/// moment each assignment or retraction happens; nothing is buffered or
/// reordered. [`frame`](SolveObserver::frame) requests a full repaint and
/// fires once when a solution is found.
///
/// Implementations observe the board, they never mutate it.
pub trait SolveObserver {
    /// A digit was assigned at `pos`.
    fn cell_assigned(&mut self, pos: Position, digit: Digit) {
        let _ = (pos, digit);
    }

    /// The cell at `pos` was cleared again while backtracking.
    fn cell_retracted(&mut self, pos: Position) {
        let _ = pos;
    }

    /// The board should be fully repainted.
    fn frame(&mut self, board: &Board) {
        let _ = board;
    }
}

/// An observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SolveObserver for NullObserver {}
