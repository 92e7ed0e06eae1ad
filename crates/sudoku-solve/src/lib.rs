//! Sudoku solving engine with uniqueness detection.
//!
//! Given a partially filled 9×9 grid, the engine decides whether a unique
//! completion exists and produces it. Outcomes are a closed three-way
//! classification — no solution, unique, multiple — with the search cut
//! short as soon as a second completion is proven.
//!
//! The intended call order for embedding callers is [`Grid::validate`]
//! first, then [`Solver::solve`]; [`solve_puzzle`] packages that pipeline
//! (plus the minimum-givens gate) into one call.

pub mod grid;
pub mod puzzle;
pub mod solver;

// Re-export main types for convenience
pub use grid::{Grid, Position, ValidationResult};
pub use puzzle::{sample_puzzle, solve_puzzle, PuzzleOutcome, MIN_GIVENS};
pub use solver::{SearchStats, SolveOutcome, Solver};
