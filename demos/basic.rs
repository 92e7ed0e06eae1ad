//! Basic example of using the solving engine

use sudoku_solve::{sample_puzzle, solve_puzzle, Grid, Position, PuzzleOutcome, Solver};

fn main() {
    // Solve the built-in sample puzzle
    let puzzle = sample_puzzle();
    println!("Sample puzzle ({} givens):", puzzle.given_count());
    println!("{}", puzzle);

    match solve_puzzle(&puzzle) {
        PuzzleOutcome::Unique(solution) => {
            println!("Unique solution:");
            println!("{}", solution);
        }
        other => println!("Unexpected outcome: {:?}", other),
    }

    // Contradictory input is rejected before any search runs
    let mut bad = puzzle;
    bad.set(Position::new(0, 0), bad.get(Position::new(1, 0)));
    println!("After cloning a given into its column:");
    match solve_puzzle(&bad) {
        PuzzleOutcome::Contradictory { conflicts } => {
            println!("Contradictory input, {} conflicting cells", conflicts.len());
        }
        other => println!("Unexpected outcome: {:?}", other),
    }

    // An underdetermined grid is classified without enumerating solutions
    let sparse = Grid::from_string(
        "123456789000000000000000000000000000000000000000000000000000000000000000000000000",
    )
    .unwrap();
    let (outcome, stats) = Solver::new().solve_with_stats(&sparse);
    println!(
        "Sparse grid: {:?} ({} trial placements)",
        outcome, stats.placements
    );
}
