//! Test utilities and mock types for Wumpus-world development.
//!
//! Provides a scripted mock of the [`Environment`] trait, whose pose,
//! percepts and flags are set directly by the test, and a set of layout
//! fixtures for end-to-end scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    corridor_layout, pit_ring_layout, scenario_field, scenario_layout, SCENARIO_GRID,
};

use wumpus_core::{ActionKind, Cell, EpisodeStatus, Heading, Percepts};
use wumpus_space::Grid;
use wumpus_world::Environment;

/// Mock implementation of [`Environment`].
///
/// Nothing is simulated beyond what a test needs to observe the agent:
/// moves advance the pose when the grid allows it, turns rotate it, and
/// every call is appended to [`log`](ScriptedEnvironment::log). Percepts
/// and flags stay exactly as the test sets them, except that `bump` is
/// raised by a blocked move.
///
/// `shoot` and `grab` answer with the scripted
/// [`shot_hits`](ScriptedEnvironment::shot_hits) and
/// [`goal_here`](ScriptedEnvironment::goal_here) results.
#[derive(Clone, Debug)]
pub struct ScriptedEnvironment {
    pub grid: Grid,
    pub position: Cell,
    pub heading: Heading,
    pub percepts: Percepts,
    pub status: EpisodeStatus,
    pub holding_goal: bool,
    pub armed: bool,
    pub creature_alive: bool,
    pub shot_hits: bool,
    pub goal_here: bool,
    pub log: Vec<ActionKind>,
}

impl ScriptedEnvironment {
    /// A quiet `n × n` grid with the agent at the origin facing right,
    /// armed, creature alive.
    pub fn new(n: u32) -> Self {
        Self {
            grid: Grid::square(n).expect("scripted grid size must be non-zero"),
            position: Cell::ORIGIN,
            heading: Heading::Right,
            percepts: Percepts::NONE,
            status: EpisodeStatus::Continuing,
            holding_goal: false,
            armed: true,
            creature_alive: true,
            shot_hits: false,
            goal_here: false,
            log: Vec::new(),
        }
    }

    /// Builder-style pose override.
    pub fn at(mut self, position: Cell, heading: Heading) -> Self {
        self.position = position;
        self.heading = heading;
        self
    }

    /// Builder-style percept override.
    pub fn sensing(mut self, percepts: Percepts) -> Self {
        self.percepts = percepts;
        self
    }

    /// Builder-style holding-goal override.
    pub fn holding(mut self, holding_goal: bool) -> Self {
        self.holding_goal = holding_goal;
        self
    }
}

impl Environment for ScriptedEnvironment {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn position(&self) -> Cell {
        self.position
    }

    fn heading(&self) -> Heading {
        self.heading
    }

    fn percepts(&self) -> Percepts {
        self.percepts
    }

    fn move_forward(&mut self) -> bool {
        self.log.push(ActionKind::MoveForward);
        match self.grid.forward(self.position, self.heading) {
            Some(next) => {
                self.position = next;
                self.percepts.bump = false;
                true
            }
            None => {
                self.percepts.bump = true;
                false
            }
        }
    }

    fn turn_left(&mut self) {
        self.log.push(ActionKind::TurnLeft);
        self.heading = self.heading.turned_left();
    }

    fn turn_right(&mut self) {
        self.log.push(ActionKind::TurnRight);
        self.heading = self.heading.turned_right();
    }

    fn shoot(&mut self) -> bool {
        self.log.push(ActionKind::Shoot);
        let fired = self.armed;
        self.armed = false;
        let hit = fired && self.shot_hits && self.creature_alive;
        if hit {
            self.creature_alive = false;
            self.percepts.scream = true;
        }
        hit
    }

    fn grab(&mut self) -> bool {
        self.log.push(ActionKind::GrabGoal);
        if !self.goal_here {
            return false;
        }
        self.goal_here = false;
        self.holding_goal = true;
        self.percepts.glitter = false;
        true
    }

    fn status(&self) -> EpisodeStatus {
        self.status
    }

    fn holding_goal(&self) -> bool {
        self.holding_goal
    }

    fn armed(&self) -> bool {
        self.armed
    }

    fn creature_alive(&self) -> bool {
        self.creature_alive
    }
}
