//! Backtracking search engine.
//!
//! Depth-first search over the 81 cells in linear order, trying digits
//! ascending, with in-place trial and unconditional undo. Solution
//! recording saturates at two: the engine proves multiplicity, it never
//! enumerates.

use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Recording stops once this many complete assignments have been found.
const SOLUTION_CAP: usize = 2;

/// Outcome of a solve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// The search space was exhausted without a complete assignment.
    NoSolution,
    /// Exactly one completion exists; every given keeps its input value.
    Unique(Grid),
    /// At least two completions exist. The exact count is never computed.
    Multiple,
}

/// Counters describing how much work a solve call performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls to the constraint-check primitive.
    pub constraint_checks: u64,
    /// Trial assignments actually placed (and later undone).
    pub placements: u64,
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle and classify its solution cardinality.
    ///
    /// The input must already have passed [`Grid::validate`]; givens are
    /// trusted and never re-checked or overwritten. The search works on a
    /// private copy, so the caller's grid is never mutated.
    pub fn solve(&self, grid: &Grid) -> SolveOutcome {
        self.solve_with_stats(grid).0
    }

    /// Like [`Solver::solve`], additionally reporting search counters.
    pub fn solve_with_stats(&self, grid: &Grid) -> (SolveOutcome, SearchStats) {
        let mut ctx = SearchContext {
            grid: *grid,
            solutions: Vec::with_capacity(SOLUTION_CAP),
            stats: SearchStats::default(),
        };
        ctx.dfs(0);

        let outcome = match ctx.solutions.len() {
            0 => SolveOutcome::NoSolution,
            1 => SolveOutcome::Unique(ctx.solutions[0]),
            _ => SolveOutcome::Multiple,
        };
        (outcome, ctx.stats)
    }

    /// Check if the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        matches!(self.solve(grid), SolveOutcome::Unique(_))
    }
}

/// Per-call search state: the working grid, the solution buffer (capped at
/// [`SOLUTION_CAP`]), and the work counters. Owning this state in one
/// struct keeps the multiplicity short-circuit explicit instead of
/// threading a flag through the recursion.
struct SearchContext {
    grid: Grid,
    solutions: Vec<Grid>,
    stats: SearchStats,
}

impl SearchContext {
    fn dfs(&mut self, index: usize) {
        // Multiplicity proven: prune everything, including sibling
        // branches still pending on the recursion stack.
        if self.solutions.len() >= SOLUTION_CAP {
            return;
        }
        if index == 81 {
            self.solutions.push(self.grid);
            return;
        }

        let pos = Position::from_index(index);

        // Givens pass straight through, no branching.
        if self.grid.get(pos).is_some() {
            self.dfs(index + 1);
            return;
        }

        for value in 1..=9 {
            if self.solutions.len() >= SOLUTION_CAP {
                return;
            }
            self.stats.constraint_checks += 1;
            if self.grid.placement_allowed(pos, value) {
                self.stats.placements += 1;
                self.grid.set(pos, Some(value));
                self.dfs(index + 1);
                // Undo unconditionally so sibling trials see the
                // pre-trial grid.
                self.grid.set(pos, None);
            }
        }
    }
}
