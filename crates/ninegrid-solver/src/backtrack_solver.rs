//! The recursive backtracking solver.

use ninegrid_core::{Board, Digit, DigitSet, Position};

use crate::observer::{NullObserver, SolveObserver};

/// Internal invariant violation: candidate selection found no empty cell
/// even though the board is not full.
///
/// This is structurally unreachable (the solution check runs before
/// selection at every depth); if it ever surfaces it indicates a defect in
/// the fullness bookkeeping, not a property of the puzzle. Unsolvable
/// puzzles are reported through `Ok(false)`, never through this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no moves possible: no empty cell despite unfilled board")]
pub struct NoMovesError;

/// One trial assignment at a given search depth.
///
/// The solver keeps 81 of these as depth-indexed scratch slots, each
/// overwritten in place across backtracking attempts at its depth. This is
/// reused scratch space, not a history log.
#[derive(Debug, Clone, Copy)]
struct Move {
    pos: Position,
    digit: Digit,
}

impl Move {
    const UNSET: Self = Self {
        pos: Position::new(0, 0),
        digit: Digit::D1,
    };
}

/// Exhaustive backtracking search over a [`Board`].
///
/// At each depth the solver picks the empty cell with the most digits
/// already forbidden (ties broken by row-major scan order), enumerates its
/// candidates in ascending digit order, forward-checks each with
/// [`Board::look_ahead`], and recurses on the survivors. Failed trials are
/// retracted before the next candidate; the first full assignment wins and
/// the recursion unwinds without further mutation, leaving the solved grid
/// on the board.
///
/// The solver owns its board exclusively for the duration of the search;
/// `iteration` counts assignment and retraction operations and doubles as
/// a difficulty rating.
///
/// # Examples
///
/// ```
/// use ninegrid_core::Board;
/// use ninegrid_solver::BacktrackSolver;
///
/// // An empty board is solvable; some complete valid grid comes back.
/// let mut solver = BacktrackSolver::new(Board::new());
/// assert!(solver.solve()?);
/// assert!(solver.board().is_solved());
/// # Ok::<(), ninegrid_solver::NoMovesError>(())
/// ```
pub struct BacktrackSolver {
    board: Board,
    moves: [Move; 81],
    iteration: u64,
    finished: bool,
    observer: Box<dyn SolveObserver>,
}

impl std::fmt::Debug for BacktrackSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacktrackSolver")
            .field("board", &self.board)
            .field("iteration", &self.iteration)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl BacktrackSolver {
    /// Creates a solver over `board` with no display attached.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_observer(board, Box::new(NullObserver))
    }

    /// Creates a solver that reports every assignment and retraction to
    /// `observer`, synchronously and in program order.
    #[must_use]
    pub fn with_observer(board: Board, observer: Box<dyn SolveObserver>) -> Self {
        Self {
            board,
            moves: [Move::UNSET; 81],
            iteration: 0,
            finished: false,
            observer,
        }
    }

    /// Runs the backtracking search from depth 0.
    ///
    /// Returns `Ok(true)` if a solution was found; the board then holds
    /// the first fully solved grid encountered (no uniqueness check, no
    /// alternates). Returns `Ok(false)` if exhaustive search ran out of
    /// candidates: an unsolvable puzzle is a normal outcome, and every
    /// trial has been retracted, leaving the board as loaded.
    ///
    /// # Errors
    ///
    /// Returns [`NoMovesError`] only on an internal invariant violation;
    /// see its documentation.
    pub fn solve(&mut self) -> Result<bool, NoMovesError> {
        self.backtrack(0)?;
        Ok(self.finished)
    }

    /// Returns the board in its current state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the solver and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the number of assignment and retraction operations
    /// performed so far.
    ///
    /// Higher counts indicate a harder search; an already-solved input
    /// reports 0.
    #[must_use]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    fn backtrack(&mut self, depth: usize) -> Result<(), NoMovesError> {
        if self.board.is_full() {
            self.finished = true;
            self.observer.frame(&self.board);
            return Ok(());
        }

        let pos = self.most_constrained_cell().ok_or(NoMovesError)?;
        self.moves[depth].pos = pos;

        for digit in self.surviving_candidates(pos) {
            self.moves[depth].digit = digit;
            self.make_move(depth);
            self.backtrack(depth + 1)?;
            if self.finished {
                // the grid must remain exactly as solved
                return Ok(());
            }
            self.unmake_move(depth);
        }
        Ok(())
    }

    /// Scans the whole board for the empty cell with the maximum number of
    /// forbidden digits. The first maximum in row-major order wins, which
    /// keeps the search deterministic.
    fn most_constrained_cell(&self) -> Option<Position> {
        let mut best: Option<(Position, usize)> = None;
        for pos in Position::ALL {
            if self.board.get(pos).is_some() {
                continue;
            }
            let count = self.board.constraint_count(pos);
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((pos, count));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Computes the candidates at `pos` that survive forward checking, in
    /// ascending digit order.
    fn surviving_candidates(&mut self, pos: Position) -> DigitSet {
        let mut survivors = DigitSet::new();
        for digit in self.board.possible_values(pos) {
            if self.board.look_ahead(pos, digit) {
                survivors.insert(digit);
            }
        }
        survivors
    }

    fn make_move(&mut self, depth: usize) {
        let Move { pos, digit } = self.moves[depth];
        self.iteration += 1;
        log::trace!(
            "iteration {}, depth {depth}: assign {digit} at {pos}",
            self.iteration
        );
        self.board.assign(pos, digit);
        self.observer.cell_assigned(pos, digit);
    }

    fn unmake_move(&mut self, depth: usize) {
        let Move { pos, digit } = self.moves[depth];
        self.iteration += 1;
        log::trace!(
            "iteration {}, depth {depth}: retract {digit} at {pos}",
            self.iteration
        );
        self.board.retract(pos, digit);
        self.observer.cell_retracted(pos);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use ninegrid_core::DigitGrid;

    use super::*;

    const CLASSIC: &str = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79";

    const CLASSIC_SOLUTION: &str = "\
534678912
672195348
198342567
859761423
426853791
713924856
961537284
287419635
345286179";

    const HARD: &str = "\
.....7..9
.4..812..
...9...1.
..53...72
293....5.
.....53..
8...23...
7...5..4.
531.7....";

    const HARD_SOLUTION: &str = "\
312547869
947681235
658932714
185364972
293718456
476295381
864123597
729856143
531479628";

    fn board_from(s: &str) -> Board {
        let grid: DigitGrid = s.parse().expect("test grid must parse");
        Board::from_grid(&grid).expect("test grid must load")
    }

    fn assert_matches_grid(board: &Board, expected: &str) {
        let grid: DigitGrid = expected.parse().expect("expected grid must parse");
        for pos in Position::ALL {
            assert_eq!(board.get(pos), grid[pos], "mismatch at {pos}");
        }
    }

    #[test]
    fn test_solve_classic_puzzle() {
        let board = board_from(CLASSIC);
        let filled_by_search = u64::from(board.free_count());

        let mut solver = BacktrackSolver::new(board);
        assert_eq!(solver.solve(), Ok(true));
        assert!(solver.board().is_solved());
        assert_matches_grid(solver.board(), CLASSIC_SOLUTION);

        // every cell the search filled took at least one assignment
        assert!(solver.iteration() >= filled_by_search);
    }

    #[test]
    fn test_solve_hard_puzzle() {
        let mut solver = BacktrackSolver::new(board_from(HARD));
        assert_eq!(solver.solve(), Ok(true));
        assert!(solver.board().is_solved());
        assert_matches_grid(solver.board(), HARD_SOLUTION);
    }

    #[test]
    fn test_already_solved_input_takes_zero_iterations() {
        let mut solver = BacktrackSolver::new(board_from(CLASSIC_SOLUTION));
        assert_eq!(solver.solve(), Ok(true));
        assert_eq!(solver.iteration(), 0);
        assert_matches_grid(solver.board(), CLASSIC_SOLUTION);
    }

    #[test]
    fn test_empty_board_yields_some_valid_grid() {
        let mut solver = BacktrackSolver::new(Board::new());
        assert_eq!(solver.solve(), Ok(true));
        assert!(solver.board().is_solved());
    }

    #[test]
    fn test_single_open_cell() {
        let mut grid: DigitGrid = CLASSIC_SOLUTION.parse().unwrap();
        grid.set(Position::new(0, 0), None);
        let board = Board::from_grid(&grid).unwrap();
        assert_eq!(
            board.possible_values(Position::new(0, 0)),
            DigitSet::from_iter([Digit::D5])
        );

        let mut solver = BacktrackSolver::new(board);
        assert_eq!(solver.solve(), Ok(true));
        assert_eq!(solver.board().get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(solver.iteration(), 1);
    }

    #[test]
    fn test_unsolvable_puzzle_is_a_normal_outcome() {
        // (0, 0) is empty while its row holds 1-4, its column 5-8, and its
        // box additionally 9: all nine digits are forbidden there.
        let board = board_from(
            "\
.1234....
.9.......
.........
5........
6........
7........
8........
.........
.........",
        );
        assert_eq!(board.constraint_count(Position::new(0, 0)), 9);

        let before = board.clone();
        let mut solver = BacktrackSolver::new(board);
        assert_eq!(solver.solve(), Ok(false));

        // exhaustion retracts every trial: the board is as loaded
        assert_eq!(*solver.board(), before);
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Assigned(Position, Digit),
        Retracted(Position),
        Frame,
    }

    #[derive(Debug, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl SolveObserver for Recorder {
        fn cell_assigned(&mut self, pos: Position, digit: Digit) {
            self.0.borrow_mut().push(Event::Assigned(pos, digit));
        }

        fn cell_retracted(&mut self, pos: Position) {
            self.0.borrow_mut().push(Event::Retracted(pos));
        }

        fn frame(&mut self, _board: &Board) {
            self.0.borrow_mut().push(Event::Frame);
        }
    }

    #[test]
    fn test_observer_sees_properly_nested_moves() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let board = board_from(CLASSIC);
        let filled_by_search = usize::from(board.free_count());

        let mut solver = BacktrackSolver::with_observer(board, Box::new(Recorder(events.clone())));
        assert_eq!(solver.solve(), Ok(true));

        let events = events.borrow();
        assert_eq!(events.last(), Some(&Event::Frame));
        assert_eq!(events.iter().filter(|e| **e == Event::Frame).count(), 1);

        // every retraction undoes the most recent unmatched assignment
        let mut stack = Vec::new();
        let mut assigned = 0_usize;
        let mut retracted = 0_usize;
        for event in events.iter() {
            match event {
                Event::Assigned(pos, _) => {
                    assigned += 1;
                    stack.push(*pos);
                }
                Event::Retracted(pos) => {
                    retracted += 1;
                    assert_eq!(stack.pop(), Some(*pos));
                }
                Event::Frame => {}
            }
        }
        // what is left on the stack is exactly the cells the search filled,
        // and iteration counts both makes and unmakes
        assert_eq!(stack.len(), filled_by_search);
        assert_eq!(solver.iteration(), u64::try_from(assigned + retracted).unwrap());
    }
}
