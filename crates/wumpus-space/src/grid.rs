//! 2D square grid with 4-connected neighbourhood (N/S/W/E).

use crate::error::SpaceError;
use smallvec::SmallVec;
use wumpus_core::{Cell, Heading};

/// Neighbour offsets in enumeration order: north, south, west, east.
const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A two-dimensional bounded grid with 4-connected neighbourhood.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Neighbours are the four cardinal directions, omitted
/// when they fall off the grid. Distance is Manhattan (L1).
///
/// # Examples
///
/// ```
/// use wumpus_space::Grid;
/// use wumpus_core::Cell;
///
/// let grid = Grid::square(4).unwrap();
/// assert_eq!(grid.cell_count(), 16);
/// assert_eq!(grid.neighbours(Cell::ORIGIN).len(), 2);
/// assert_eq!(grid.neighbours(Cell::new(1, 1)).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Create an `n × n` grid.
    pub fn square(n: u32) -> Result<Self, SpaceError> {
        Self::new(n, n)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.rows
            && (cell.col as u32) < self.cols
    }

    /// Return `cell` unchanged if it is in bounds.
    pub fn check(&self, cell: Cell) -> Result<Cell, SpaceError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpaceError::CellOutOfBounds {
                cell,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            })
        }
    }

    /// In-bounds 4-connected neighbours of `cell`, in north, south, west,
    /// east order.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        OFFSETS
            .iter()
            .map(|&(dr, dc)| cell.offset(dr, dc))
            .filter(|&nb| self.contains(nb))
            .collect()
    }

    /// The cell one step ahead of `cell` along `heading`, if in bounds.
    pub fn forward(&self, cell: Cell, heading: Heading) -> Option<Cell> {
        let next = heading.ahead_of(cell);
        self.contains(next).then_some(next)
    }

    /// Every cell strictly ahead of `cell` along `heading`, nearest first,
    /// up to the grid edge.
    pub fn ray(&self, cell: Cell, heading: Heading) -> impl Iterator<Item = Cell> + '_ {
        std::iter::successors(self.forward(cell, heading), move |&c| {
            self.forward(c, heading)
        })
    }

    /// Manhattan (L1) distance, which is the graph geodesic for 4-connected
    /// grids.
    pub fn distance(&self, a: Cell, b: Cell) -> u32 {
        a.manhattan(b)
    }

    /// All cells in row-major order: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }

    /// Position of `cell` in the row-major ordering returned by
    /// [`cells`](Self::cells).
    pub fn canonical_rank(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }
}
