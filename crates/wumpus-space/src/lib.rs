//! Grid topology for the Wumpus-world agent.
//!
//! This crate defines [`Grid`], the bounded square lattice every other crate
//! reasons over. The grid knows nothing about hazards; it answers purely
//! topological questions: is a cell in bounds, which cells are its
//! 4-connected neighbours, what lies ahead along a heading.
//!
//! Out-of-bounds neighbours are omitted (absorbing edges): corner cells have
//! two neighbours, edge cells three, interior cells four.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use grid::Grid;
