//! The concrete hazard field.

use crate::environment::Environment;
use crate::error::LayoutError;
use crate::layout::Layout;
use indexmap::IndexSet;
use std::fmt;
use wumpus_core::{Cell, EpisodeStatus, Heading, Percepts};
use wumpus_space::Grid;

/// A grid with one creature, one goal object and a set of pits, plus the
/// agent's physical state.
///
/// Percepts are recomputed after every move and turn, which also clears the
/// one-shot `bump` and `scream` flags.
#[derive(Clone, Debug)]
pub struct HazardField {
    grid: Grid,
    origin: Cell,
    creature: Cell,
    creature_alive: bool,
    goal: Option<Cell>,
    pits: IndexSet<Cell>,
    position: Cell,
    heading: Heading,
    holding_goal: bool,
    armed: bool,
    percepts: Percepts,
}

impl HazardField {
    /// Place `layout` on `grid` with the agent at `origin` facing `heading`,
    /// armed and empty-handed.
    pub fn new(
        grid: Grid,
        layout: &Layout,
        origin: Cell,
        heading: Heading,
    ) -> Result<Self, LayoutError> {
        layout.validate(&grid, origin)?;
        let mut field = Self {
            grid,
            origin,
            creature: layout.creature,
            creature_alive: true,
            goal: Some(layout.goal),
            pits: layout.pits.iter().copied().collect(),
            position: origin,
            heading,
            holding_goal: false,
            armed: true,
            percepts: Percepts::NONE,
        };
        field.percepts = field.sense();
        Ok(field)
    }

    /// The starting cell.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Where the goal object lies, or `None` once picked up.
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// The creature's cell (alive or not).
    pub fn creature(&self) -> Cell {
        self.creature
    }

    /// Whether `cell` holds a pit.
    pub fn is_pit(&self, cell: Cell) -> bool {
        self.pits.contains(&cell)
    }

    /// Whether `cell` would kill the agent.
    pub fn is_lethal(&self, cell: Cell) -> bool {
        self.is_pit(cell) || (self.creature_alive && cell == self.creature)
    }

    fn sense(&self) -> Percepts {
        let mut p = Percepts::NONE;
        for nb in self.grid.neighbours(self.position) {
            if self.creature_alive && nb == self.creature {
                p.stench = true;
            }
            if self.pits.contains(&nb) {
                p.breeze = true;
            }
        }
        p.glitter = self.goal == Some(self.position);
        p
    }
}

impl Environment for HazardField {
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
        match self.grid.forward(self.position, self.heading) {
            Some(next) => {
                self.position = next;
                self.percepts = self.sense();
                true
            }
            None => {
                self.percepts.bump = true;
                false
            }
        }
    }

    fn turn_left(&mut self) {
        self.heading = self.heading.turned_left();
        self.percepts = self.sense();
    }

    fn turn_right(&mut self) {
        self.heading = self.heading.turned_right();
        self.percepts = self.sense();
    }

    fn shoot(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        let hit = self.creature_alive
            && self
                .grid
                .ray(self.position, self.heading)
                .any(|c| c == self.creature);
        if hit {
            self.creature_alive = false;
            self.percepts.scream = true;
            self.percepts.stench = false;
        }
        hit
    }

    fn grab(&mut self) -> bool {
        if self.goal != Some(self.position) {
            return false;
        }
        self.goal = None;
        self.holding_goal = true;
        self.percepts.glitter = false;
        true
    }

    fn status(&self) -> EpisodeStatus {
        if self.is_lethal(self.position) {
            EpisodeStatus::Defeat
        } else if self.holding_goal && self.position == self.origin {
            EpisodeStatus::Victory
        } else {
            EpisodeStatus::Continuing
        }
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

/// Renders the revealed board, one row per line.
///
/// `A` agent, `W` living creature, `P` pit, `G` goal, `.` empty. The agent
/// glyph wins when it shares a cell with anything else.
impl fmt::Display for HazardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() as i32 {
            let row: String = (0..self.grid.cols() as i32)
                .map(|c| {
                    let cell = Cell::new(r, c);
                    if cell == self.position {
                        'A'
                    } else if self.creature_alive && cell == self.creature {
                        'W'
                    } else if self.pits.contains(&cell) {
                        'P'
                    } else if self.goal == Some(cell) {
                        'G'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
