//! Caller-level solve pipeline.
//!
//! Embedding callers (a UI, a service) hand over a grid and want one
//! user-presentable state back. This layer runs the givens gate and the
//! validation pass before committing any search resources, then maps the
//! engine outcome through unchanged.

use crate::grid::{Grid, Position};
use crate::solver::{SolveOutcome, Solver};
use serde::{Deserialize, Serialize};

/// Minimum number of givens for a 9×9 Sudoku to possibly have a unique
/// solution. Grids below this are rejected without searching.
pub const MIN_GIVENS: usize = 17;

/// User-facing result of submitting a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleOutcome {
    /// Fewer than [`MIN_GIVENS`] filled cells; search was not attempted.
    TooFewGivens { givens: usize },
    /// The givens contradict each other; search was not attempted.
    Contradictory { conflicts: Vec<Position> },
    /// No completion exists.
    NoSolution,
    /// Exactly one completion exists.
    Unique(Grid),
    /// More than one completion exists.
    Multiple,
}

/// Gate, validate, then solve.
///
/// Order matters: the givens count and the consistency of the pre-filled
/// cells are both checked before the solver runs, so contradictory input
/// never reaches the search engine.
pub fn solve_puzzle(grid: &Grid) -> PuzzleOutcome {
    let givens = grid.given_count();
    if givens < MIN_GIVENS {
        return PuzzleOutcome::TooFewGivens { givens };
    }

    let validation = grid.validate();
    if !validation.is_valid {
        return PuzzleOutcome::Contradictory {
            conflicts: validation.conflicts,
        };
    }

    match Solver::new().solve(grid) {
        SolveOutcome::NoSolution => PuzzleOutcome::NoSolution,
        SolveOutcome::Unique(solution) => PuzzleOutcome::Unique(solution),
        SolveOutcome::Multiple => PuzzleOutcome::Multiple,
    }
}

/// A well-known 32-given starter puzzle with a unique solution, handy for
/// demos and smoke tests.
pub fn sample_puzzle() -> Grid {
    Grid::from_string(
        "000260701680070090190004500820100040004602900050003028009300074040050036703018000",
    )
    .expect("sample puzzle literal is well-formed")
}
