//! Core types for the Wumpus-world logic agent.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the whole workspace: grid cells, headings, percepts,
//! action kinds and episode status.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell;
pub mod heading;
pub mod percept;
pub mod status;

pub use action::ActionKind;
pub use cell::Cell;
pub use heading::Heading;
pub use percept::Percepts;
pub use status::EpisodeStatus;
