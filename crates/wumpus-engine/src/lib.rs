//! Episode engine for the Wumpus-world logic agent.
//!
//! Wires a [`HazardField`](wumpus_world::HazardField) and a
//! [`LogicAgent`](wumpus_agent::LogicAgent) together and drives them turn by
//! turn until victory, defeat or the step limit. Configuration is validated
//! up front; per-turn diagnostics go through `tracing`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod episode;
pub mod metrics;

pub use config::{ConfigError, EpisodeConfig};
pub use episode::{Episode, EpisodeReport, Outcome, TurnResult};
pub use metrics::EpisodeMetrics;
