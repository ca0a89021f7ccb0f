//! Belief state built from percept history.
//!
//! The knowledge base never sees the ground truth. Each
//! [`update`](KnowledgeBase::update) folds the percepts perceived at one cell
//! into the belief sets and then resolves the two deduction rules:
//!
//! * a sole remaining creature candidate is confirmed and marked unsafe;
//! * a pit candidate that cannot also be the creature is marked unsafe.
//!
//! All sets iterate in insertion order, so every consumer (planner, decision
//! rules, tests) sees the same sequence for the same percept history.

use indexmap::IndexSet;
use wumpus_core::{Cell, Percepts};
use wumpus_space::Grid;

/// The agent's classified view of the grid.
///
/// `safe` and `unsafe` are kept disjoint and every visited cell is safe.
/// Unsafe classification is sticky: a cell flagged unsafe is never re-marked
/// safe by neighbouring evidence, only by the agent standing on it.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    grid: Grid,
    visited: IndexSet<Cell>,
    safe: IndexSet<Cell>,
    unsafe_cells: IndexSet<Cell>,
    candidate_wumpus: IndexSet<Cell>,
    candidate_pit: IndexSet<Cell>,
    stench_cells: IndexSet<Cell>,
    breeze_cells: IndexSet<Cell>,
    confirmed_wumpus: Option<Cell>,
    goal_cell: Option<Cell>,
}

impl KnowledgeBase {
    /// Empty beliefs except for `origin`, which is visited and safe.
    pub fn new(grid: Grid, origin: Cell) -> Self {
        let mut kb = Self {
            grid,
            visited: IndexSet::new(),
            safe: IndexSet::new(),
            unsafe_cells: IndexSet::new(),
            candidate_wumpus: IndexSet::new(),
            candidate_pit: IndexSet::new(),
            stench_cells: IndexSet::new(),
            breeze_cells: IndexSet::new(),
            confirmed_wumpus: None,
            goal_cell: None,
        };
        kb.occupy(origin);
        kb
    }

    /// Fold the percepts observed at `position` into the beliefs.
    ///
    /// Present warnings first nominate every unknown neighbour as a candidate
    /// for that hazard. Absent warnings then drop the neighbour from the
    /// matching candidate set and prove it safe once it is suspected of
    /// nothing. Repeating the same call is harmless: every step is a set
    /// insertion or removal.
    ///
    /// A quiet warning therefore does not prove a neighbour safe on its own:
    /// with stench absent but breeze present, a neighbour leaves the creature
    /// candidates yet stays a pit candidate, and is not marked safe.
    pub fn update(&mut self, position: Cell, percepts: Percepts) {
        self.occupy(position);

        if percepts.glitter {
            self.goal_cell = Some(position);
        }
        if percepts.scream {
            // Cells already flagged unsafe stay flagged.
            self.confirmed_wumpus = None;
            self.candidate_wumpus.clear();
        }

        if percepts.stench {
            self.stench_cells.insert(position);
        }
        if percepts.breeze {
            self.breeze_cells.insert(position);
        }

        let neighbours = self.grid.neighbours(position);
        for &nb in &neighbours {
            if self.visited.contains(&nb) || self.safe.contains(&nb) {
                continue;
            }
            if percepts.stench {
                self.candidate_wumpus.insert(nb);
            }
            if percepts.breeze {
                self.candidate_pit.insert(nb);
            }
        }
        for &nb in &neighbours {
            if !percepts.stench {
                self.candidate_wumpus.shift_remove(&nb);
            }
            if !percepts.breeze {
                self.candidate_pit.shift_remove(&nb);
            }
            if !percepts.stench || !percepts.breeze {
                self.clear_if_unsuspected(nb);
            }
        }

        self.resolve();
    }

    /// Record `cell` as safe unless it is already flagged unsafe.
    ///
    /// A cell proven safe leaves both candidate sets. Returns whether the
    /// cell is safe afterwards. Besides [`update`](Self::update), scenario
    /// set-up uses this to seed prior knowledge.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        if !self.grid.contains(cell) || self.unsafe_cells.contains(&cell) {
            return false;
        }
        self.safe.insert(cell);
        self.candidate_wumpus.shift_remove(&cell);
        self.candidate_pit.shift_remove(&cell);
        true
    }

    /// A quiet warning proves `cell` free of that hazard; it becomes safe
    /// once no candidate set still holds it.
    fn clear_if_unsuspected(&mut self, cell: Cell) {
        if !self.candidate_wumpus.contains(&cell) && !self.candidate_pit.contains(&cell) {
            self.mark_safe(cell);
        }
    }

    /// Seed a confirmed creature location. Refused for cells already known
    /// safe.
    pub fn confirm_wumpus(&mut self, cell: Cell) -> bool {
        if !self.grid.contains(cell) || self.safe.contains(&cell) {
            return false;
        }
        self.candidate_wumpus.shift_remove(&cell);
        self.confirmed_wumpus = Some(cell);
        self.unsafe_cells.insert(cell);
        true
    }

    /// Standing on a cell proves it safe, whatever was believed before.
    fn occupy(&mut self, cell: Cell) {
        self.unsafe_cells.shift_remove(&cell);
        self.candidate_wumpus.shift_remove(&cell);
        self.candidate_pit.shift_remove(&cell);
        if self.confirmed_wumpus == Some(cell) {
            self.confirmed_wumpus = None;
        }
        self.visited.insert(cell);
        self.safe.insert(cell);
    }

    fn resolve(&mut self) {
        if self.candidate_wumpus.len() == 1 {
            if let Some(cell) = self.candidate_wumpus.pop() {
                self.confirmed_wumpus = Some(cell);
                self.unsafe_cells.insert(cell);
            }
        }
        for &cell in &self.candidate_pit {
            if !self.candidate_wumpus.contains(&cell) {
                self.unsafe_cells.insert(cell);
            }
        }
    }

    /// Topology the beliefs range over.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells the agent has stood on.
    pub fn visited(&self) -> &IndexSet<Cell> {
        &self.visited
    }

    /// Cells proven hazard-free.
    pub fn safe(&self) -> &IndexSet<Cell> {
        &self.safe
    }

    /// Cells proven or deduced to hold a hazard.
    pub fn unsafe_cells(&self) -> &IndexSet<Cell> {
        &self.unsafe_cells
    }

    /// Cells that might hold the creature.
    pub fn candidate_wumpus(&self) -> &IndexSet<Cell> {
        &self.candidate_wumpus
    }

    /// Cells that might hold a pit.
    pub fn candidate_pit(&self) -> &IndexSet<Cell> {
        &self.candidate_pit
    }

    /// Visited cells where a stench was perceived.
    pub fn stench_cells(&self) -> &IndexSet<Cell> {
        &self.stench_cells
    }

    /// Visited cells where a breeze was perceived.
    pub fn breeze_cells(&self) -> &IndexSet<Cell> {
        &self.breeze_cells
    }

    /// The deduced creature location, if any.
    pub fn confirmed_wumpus(&self) -> Option<Cell> {
        self.confirmed_wumpus
    }

    /// Where glitter was perceived, if anywhere.
    pub fn goal_cell(&self) -> Option<Cell> {
        self.goal_cell
    }

    /// Whether the agent has stood on `cell`.
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Whether the planner may route through `cell`.
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.safe.contains(&cell) && !self.unsafe_cells.contains(&cell)
    }

    /// Whether `cell` is safe and still unexplored.
    pub fn is_frontier(&self, cell: Cell) -> bool {
        self.is_traversable(cell) && !self.visited.contains(&cell)
    }

    /// Whether any safe cell remains unexplored.
    pub fn has_frontier(&self) -> bool {
        self.safe.iter().any(|&c| self.is_frontier(c))
    }

    /// Check the structural invariants: `safe` and `unsafe` disjoint,
    /// `visited` inside `safe`, safe cells absent from both candidate sets.
    pub fn invariant_violation(&self) -> Option<String> {
        if let Some(c) = self.safe.iter().find(|c| self.unsafe_cells.contains(*c)) {
            return Some(format!("{c} is both safe and unsafe"));
        }
        if let Some(c) = self.visited.iter().find(|c| !self.safe.contains(*c)) {
            return Some(format!("{c} is visited but not safe"));
        }
        if let Some(c) = self
            .safe
            .iter()
            .find(|c| self.candidate_wumpus.contains(*c) || self.candidate_pit.contains(*c))
        {
            return Some(format!("{c} is safe but still a candidate"));
        }
        None
    }
}
