//! Wumpus: a knowledge-based agent for the Wumpus world.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Wumpus sub-crates. For most users, adding `wumpus` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wumpus::prelude::*;
//!
//! let config = EpisodeConfig {
//!     grid_size: 4,
//!     seed: 7,
//!     ..EpisodeConfig::default()
//! };
//! let mut episode = Episode::new(config).unwrap();
//! let report = episode.run();
//! assert!(report.turns >= 1);
//! println!("{} after {} turns", report.outcome, report.turns);
//! ```
//!
//! Driving the agent by hand against any [`Environment`](world::Environment):
//!
//! ```rust
//! use wumpus::prelude::*;
//!
//! let grid = Grid::square(4).unwrap();
//! let layout = Layout::new(Cell::new(3, 3), Cell::new(1, 1));
//! let mut field = HazardField::new(grid, &layout, Cell::ORIGIN, Heading::Right).unwrap();
//! let mut agent = LogicAgent::for_environment(&field);
//!
//! let action = agent.decide_action(&field);
//! agent.execute_action(action, &mut field);
//! assert!(agent.knowledge().is_visited(Cell::ORIGIN));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wumpus-core` | Cells, headings, percepts, actions, status |
//! | [`space`] | `wumpus-space` | Bounded grid topology |
//! | [`world`] | `wumpus-world` | Environment trait, layouts, hazard field |
//! | [`agent`] | `wumpus-agent` | Knowledge base, planner, decision rules |
//! | [`engine`] | `wumpus-engine` | Episode configuration and runner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared value types (`wumpus-core`).
pub use wumpus_core as types;

/// Grid topology (`wumpus-space`).
///
/// [`space::Grid`] answers bounds, neighbour and ray queries.
pub use wumpus_space as space;

/// The world the agent acts in (`wumpus-world`).
///
/// [`world::Environment`] is the contract the agent is written against;
/// [`world::HazardField`] is the ground-truth implementation.
pub use wumpus_world as world;

/// Belief state, planning and policy (`wumpus-agent`).
pub use wumpus_agent as agent;

/// Episode runner (`wumpus-engine`).
pub use wumpus_engine as engine;

/// Common imports for typical Wumpus usage.
///
/// ```rust
/// use wumpus::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use wumpus_core::{ActionKind, Cell, EpisodeStatus, Heading, Percepts};

    // Space
    pub use wumpus_space::{Grid, SpaceError};

    // World
    pub use wumpus_world::{Environment, HazardField, Layout, LayoutError};

    // Agent
    pub use wumpus_agent::{KnowledgeBase, LogicAgent, Plan, Rule, Target};

    // Engine
    pub use wumpus_engine::{
        ConfigError, Episode, EpisodeConfig, EpisodeMetrics, EpisodeReport, Outcome, TurnResult,
    };
}
