//! Error types for hazard layouts.

use std::fmt;
use wumpus_core::Cell;

/// A hazard layout that cannot be placed on the given grid.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// An object lies outside the grid.
    OutOfBounds {
        /// Which object (`"creature"`, `"goal"`, `"pit"`, `"origin"`).
        what: &'static str,
        /// Where it was placed.
        cell: Cell,
    },
    /// An object was placed on the agent's starting cell.
    OnOrigin {
        /// Which object.
        what: &'static str,
    },
    /// Two objects share a cell.
    Overlap {
        /// The shared cell.
        cell: Cell,
    },
    /// The grid has too few cells to hold origin, creature and goal apart.
    GridTooSmall {
        /// Number of cells available.
        cells: usize,
    },
    /// Pit probability outside `[0, 1]` or not finite.
    InvalidPitProbability {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { what, cell } => write!(f, "{what} at {cell} is out of bounds"),
            Self::OnOrigin { what } => write!(f, "{what} may not be placed on the origin"),
            Self::Overlap { cell } => write!(f, "more than one object at {cell}"),
            Self::GridTooSmall { cells } => {
                write!(f, "grid has {cells} cells, at least 3 are required")
            }
            Self::InvalidPitProbability { value } => {
                write!(f, "pit probability must be in [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
