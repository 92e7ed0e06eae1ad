//! Grid representation and constraint checking.
//!
//! The grid is the sole mutable state during a solve: a 9×9 matrix of
//! optional digits, `None` meaning empty. The constraint-check primitive
//! and the pre-search validation pass both live here.

use serde::{Deserialize, Serialize};

/// A cell coordinate: row and column, each in 0..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Linearized cell index in 0..81, row-major.
    pub fn index(&self) -> usize {
        self.row * 9 + self.col
    }

    /// Position for a linear index in 0..81.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 81);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Index of the 3×3 box containing this position, in 0..9.
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }
}

/// Result of validating a grid's pre-filled cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no two filled cells conflict.
    pub is_valid: bool,
    /// Filled cells that conflict with another filled cell.
    pub conflicts: Vec<Position>,
}

/// A 9×9 Sudoku grid. `None` = empty, `Some(d)` = digit 1–9.
///
/// Serializes as a 9×9 array of `null` / digit, which is the shape
/// embedding callers naturally produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Option<u8>; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Parse a grid from an 81-character string, row-major.
    /// `'1'..'9'` are givens; `'0'` and `'.'` are empty. Returns `None`
    /// on wrong length or any other character.
    pub fn from_string(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 81 {
            return None;
        }
        let mut grid = Self::new();
        for (i, &c) in chars.iter().enumerate() {
            let pos = Position::from_index(i);
            match c {
                '0' | '.' => {}
                '1'..='9' => grid.set(pos, Some(c as u8 - b'0')),
                _ => return None,
            }
        }
        Some(grid)
    }

    /// Value at a position, `None` if empty.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Set or clear the value at a position.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(value.map_or(true, |v| (1..=9).contains(&v)));
        self.cells[pos.row][pos.col] = value;
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        81 - self.given_count()
    }

    /// True when every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    // ==================== Constraint check ====================

    /// Check whether `value` may occupy `pos` without violating the row,
    /// column, or box constraint. The target cell itself is excluded from
    /// the scan, so probing a filled cell with its own value does not
    /// self-conflict. Pure; no side effects.
    pub fn placement_allowed(&self, pos: Position, value: u8) -> bool {
        debug_assert!((1..=9).contains(&value));

        // Row and column scans, skipping the target cell.
        for i in 0..9 {
            if i != pos.col && self.cells[pos.row][i] == Some(value) {
                return false;
            }
            if i != pos.row && self.cells[i][pos.col] == Some(value) {
                return false;
            }
        }

        // Box scan.
        let box_row = (pos.row / 3) * 3;
        let box_col = (pos.col / 3) * 3;
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                if (r, c) != (pos.row, pos.col) && self.cells[r][c] == Some(value) {
                    return false;
                }
            }
        }

        true
    }

    // ==================== Validation ====================

    /// Check that the grid's filled cells are mutually consistent: every
    /// given re-probed with its own value must pass the constraint check.
    /// Contradictory input must be caught here, before any search runs.
    pub fn validate(&self) -> ValidationResult {
        let mut conflicts = Vec::new();
        for index in 0..81 {
            let pos = Position::from_index(index);
            if let Some(value) = self.get(pos) {
                if !self.placement_allowed(pos, value) {
                    conflicts.push(pos);
                }
            }
        }
        ValidationResult {
            is_valid: conflicts.is_empty(),
            conflicts,
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    Some(v) => write!(f, "{} ", v)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_count() {
        let grid = Grid::from_string(
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        )
        .unwrap();
        assert_eq!(grid.given_count(), 30);
        assert_eq!(grid.empty_count(), 51);
        assert!(!grid.is_complete());
        assert_eq!(grid.get(Position::new(0, 0)), Some(5));
        assert_eq!(grid.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Grid::from_string("123").is_none(), "wrong length");
        assert!(
            Grid::from_string(&"x".repeat(81)).is_none(),
            "bad character"
        );
    }

    #[test]
    fn test_parse_accepts_dots_for_empty() {
        let zeros = Grid::from_string(&"0".repeat(81)).unwrap();
        let dots = Grid::from_string(&".".repeat(81)).unwrap();
        assert_eq!(zeros, dots);
        assert_eq!(zeros.given_count(), 0);
    }

    #[test]
    fn test_position_index_round_trip() {
        for index in 0..81 {
            let pos = Position::from_index(index);
            assert_eq!(pos.index(), index);
        }
        assert_eq!(Position::new(4, 7).box_index(), 5);
        assert_eq!(Position::new(8, 0).box_index(), 6);
    }

    #[test]
    fn test_placement_respects_row_col_box() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(5));

        assert!(!grid.placement_allowed(Position::new(0, 8), 5), "same row");
        assert!(!grid.placement_allowed(Position::new(8, 0), 5), "same col");
        assert!(!grid.placement_allowed(Position::new(2, 2), 5), "same box");
        assert!(grid.placement_allowed(Position::new(4, 4), 5), "unrelated");
        assert!(grid.placement_allowed(Position::new(0, 8), 6), "other digit");
    }

    #[test]
    fn test_filled_cell_does_not_conflict_with_itself() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 3), Some(7));
        assert!(grid.placement_allowed(Position::new(3, 3), 7));
    }

    #[test]
    fn test_validate_detects_row_duplicate() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(5));
        grid.set(Position::new(0, 1), Some(5));

        let result = grid.validate();
        assert!(!result.is_valid);
        assert_eq!(
            result.conflicts,
            vec![Position::new(0, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn test_validate_accepts_consistent_grid() {
        let grid = Grid::from_string(
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        )
        .unwrap();
        assert!(grid.validate().is_valid);
    }

    #[test]
    fn test_grid_json_shape_matches_caller_payload() {
        // Embedding callers hand over a 9×9 array of null / digit.
        let json = r#"[
            [null,null,null,2,6,null,7,null,1],
            [6,8,null,null,7,null,null,9,null],
            [1,9,null,null,null,4,5,null,null],
            [8,2,null,1,null,null,null,4,null],
            [null,null,4,6,null,2,9,null,null],
            [null,5,null,null,null,3,null,2,8],
            [null,null,9,3,null,null,null,7,4],
            [null,4,null,null,5,null,null,3,6],
            [7,null,3,null,1,8,null,null,null]
        ]"#;
        let grid: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.given_count(), 36);
        assert_eq!(grid.get(Position::new(0, 3)), Some(2));
        assert_eq!(grid.get(Position::new(8, 8)), None);
        assert!(grid.validate().is_valid);
    }
}
