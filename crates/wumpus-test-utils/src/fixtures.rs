//! Reusable layout fixtures.
//!
//! - [`scenario_layout`]: creature in the far corner, goal one diagonal step
//!   from the origin, no pits.
//! - [`corridor_layout`]: goal at the far end of the top row.
//! - [`pit_ring_layout`]: the origin is walled in by pits, so no episode can
//!   make progress.

use wumpus_core::{Cell, Heading};
use wumpus_space::Grid;
use wumpus_world::{HazardField, Layout};

/// Side length of the grid the fixtures are laid out on.
pub const SCENARIO_GRID: u32 = 4;

/// Creature at `(3, 3)`, goal at `(1, 1)`, no pits.
pub fn scenario_layout() -> Layout {
    Layout::new(Cell::new(3, 3), Cell::new(1, 1))
}

/// Creature at `(3, 0)`, goal at `(0, 3)`, no pits.
pub fn corridor_layout() -> Layout {
    Layout::new(Cell::new(3, 0), Cell::new(0, 3))
}

/// Both neighbours of the origin hold pits.
pub fn pit_ring_layout() -> Layout {
    Layout::new(Cell::new(3, 3), Cell::new(2, 2)).with_pits([Cell::new(0, 1), Cell::new(1, 0)])
}

/// A [`HazardField`] for `layout` on the fixture grid, agent at the origin
/// facing right.
pub fn scenario_field(layout: &Layout) -> HazardField {
    let grid = Grid::square(SCENARIO_GRID).expect("fixture grid is non-empty");
    HazardField::new(grid, layout, Cell::ORIGIN, Heading::Right)
        .expect("fixture layouts are valid")
}
