//! The contract between the agent and the world it explores.

use wumpus_core::{Cell, EpisodeStatus, Heading, Percepts};
use wumpus_space::Grid;

/// Everything the agent may observe or do.
///
/// Queries never reveal hazard positions; the only evidence about hazards is
/// [`percepts`](Self::percepts). Fallible actions report failure through
/// their return value and leave the agent in place, never by panicking.
pub trait Environment {
    /// Topology of the explored grid.
    fn grid(&self) -> &Grid;

    /// The agent's current cell.
    fn position(&self) -> Cell;

    /// The agent's current heading.
    fn heading(&self) -> Heading;

    /// Percepts at the current cell.
    fn percepts(&self) -> Percepts;

    /// Step one cell forward. Returns `false` and raises `bump` when the
    /// move would leave the grid.
    fn move_forward(&mut self) -> bool;

    /// Quarter turn counter-clockwise. Always succeeds.
    fn turn_left(&mut self);

    /// Quarter turn clockwise. Always succeeds.
    fn turn_right(&mut self);

    /// Fire the arrow along the current heading. The arrow is consumed
    /// whether or not it hits; returns `true` only on a kill.
    fn shoot(&mut self) -> bool;

    /// Pick up the goal object. Returns `false` if none lies here.
    fn grab(&mut self) -> bool;

    /// Whether the episode is still running.
    fn status(&self) -> EpisodeStatus;

    /// Whether the agent carries the goal object.
    fn holding_goal(&self) -> bool;

    /// Whether the agent still has its arrow.
    fn armed(&self) -> bool;

    /// Whether the creature is still alive.
    fn creature_alive(&self) -> bool;
}
