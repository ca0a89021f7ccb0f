//! Error types for grid construction and bounds checks.

use std::fmt;
use wumpus_core::Cell;

/// Errors arising from grid construction or coordinate validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A cell is outside the bounds of the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the representable coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
