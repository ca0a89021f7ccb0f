//! Ground truth for the Wumpus-world agent.
//!
//! The agent never reads this crate's state directly. It talks to the world
//! through the [`Environment`] trait, which exposes the agent's pose, its
//! local percepts, and the handful of physical actions it may take.
//!
//! [`HazardField`] is the concrete environment: a grid holding one creature,
//! one goal object and any number of pits, laid out by a [`Layout`] that is
//! either supplied by the caller or generated from a seed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod environment;
pub mod error;
pub mod field;
pub mod layout;

pub use environment::Environment;
pub use error::LayoutError;
pub use field::HazardField;
pub use layout::{Layout, DEFAULT_PIT_PROBABILITY};
