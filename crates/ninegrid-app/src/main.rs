//! Terminal sudoku solver.
//!
//! Loads a puzzle file (or starts from an empty board), runs the
//! backtracking search, and prints the puzzle and its solution as framed
//! grids on stdout.
//!
//! Exit codes: 0 when a solution is found, 1 on any caught error, 2 when
//! exhaustive search proves there is no solution.

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use ninegrid_core::{Board, ConflictError, DigitGrid, ParseGridError};
use ninegrid_solver::{BacktrackSolver, NoMovesError};

use crate::render::TermRenderer;

mod render;

#[derive(Debug, Parser)]
#[command(name = "ninegrid", version, about = "Sudoku puzzle solver.")]
struct Args {
    /// Puzzle file: 9 rows of 9 cells, each a digit 1-9 or a blank
    /// marker (space, '.', '_', or '0'). Omitted means an empty board.
    puzzle: Option<PathBuf>,

    /// Provide a difficulty rating of the puzzle.
    #[arg(short, long)]
    rating: bool,

    /// Run in verbose mode, show solution progress.
    #[arg(short, long)]
    verbose: bool,

    /// Display full diagnostics when errors are raised.
    #[arg(short, long)]
    traceback: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("cannot read puzzle: {_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Format(ParseGridError),
    #[display("{_0}")]
    Conflict(ConflictError),
    #[display("{_0}")]
    Internal(NoMovesError),
}

fn main() -> ExitCode {
    better_panic::install();
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("no solution found");
            ExitCode::from(2)
        }
        Err(err) => {
            if args.traceback {
                eprintln!("[error]: {err:?}");
            } else {
                eprintln!("[error]: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_module("ninegrid_solver", log::LevelFilter::Trace);
    }
    builder.init();
}

fn run(args: &Args) -> Result<bool, AppError> {
    let grid = load_grid(args.puzzle.as_deref())?;
    let board = Board::from_grid(&grid)?;

    println!("PUZZLE");
    println!("{}", render::format_board(&board));

    let mut solver = BacktrackSolver::with_observer(board, Box::new(TermRenderer::new()));
    let solved = solver.solve()?;
    if solved && args.rating {
        println!("\nRATING: {}", solver.iteration());
    }
    Ok(solved)
}

fn load_grid(path: Option<&std::path::Path>) -> Result<DigitGrid, AppError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?.parse()?),
        None => Ok(DigitGrid::empty()),
    }
}
