//! Knowledge-based agent for the Wumpus world.
//!
//! Three parts, each usable on its own:
//!
//! 1. [`KnowledgeBase`] turns local percepts into classified cell safety.
//! 2. [`planner`] runs a breadth-first search over `(cell, heading)` poses
//!    to find the shortest sequence of moves and turns through safe cells.
//! 3. [`Rule`] is the priority-ordered decision table that
//!    [`LogicAgent`] evaluates once per turn.
//!
//! The agent never reads ground truth: everything it knows arrives through
//! [`Environment::percepts`](wumpus_world::Environment::percepts).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod agent;
pub mod knowledge;
pub mod planner;
pub mod policy;

pub use agent::{LogicAgent, PlannerStats};
pub use knowledge::KnowledgeBase;
pub use planner::{plan_path, Plan, Pose, Target};
pub use policy::Rule;
