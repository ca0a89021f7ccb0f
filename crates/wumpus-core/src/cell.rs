//! The [`Cell`] coordinate type.

use std::fmt;

/// A cell on the hazard grid, addressed as `(row, col)`.
///
/// Row 0 is the top row and column 0 the leftmost column. Coordinates are
/// signed so that neighbour arithmetic can step off the grid; bounds are
/// checked by the grid topology, never by `Cell` itself.
///
/// Identity is value equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (grows downward).
    pub row: i32,
    /// Column index (grows rightward).
    pub col: i32,
}

impl Cell {
    /// The conventional starting cell, `(0, 0)`.
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    /// Construct a cell from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(dr, dc)`.
    ///
    /// No bounds check is performed.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan (L1) distance between two cells.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether both cells lie on the same row or the same column.
    pub fn is_aligned_with(self, other: Cell) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
