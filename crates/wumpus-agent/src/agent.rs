//! The logic agent: belief state, active plan and the per-turn decision.

use tracing::{debug, trace};
use wumpus_core::{ActionKind, Cell, Heading};
use wumpus_space::Grid;
use wumpus_world::Environment;

use crate::knowledge::KnowledgeBase;
use crate::planner::{self, Plan, Target};
use crate::policy::Rule;

/// Counters kept across an episode for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlannerStats {
    /// Successful planner calls.
    pub computed: u64,
    /// Planner calls that found no route.
    pub failed: u64,
}

/// A knowledge-based agent for a single episode.
///
/// The agent owns its beliefs and its plan; the environment is lent to it
/// each turn. [`decide_action`](Self::decide_action) folds the current
/// percepts into the knowledge base and then evaluates [`Rule::ORDER`].
#[derive(Clone, Debug)]
pub struct LogicAgent {
    kb: KnowledgeBase,
    origin: Cell,
    pub(crate) plan: Plan,
    plan_ready: bool,
    pub(crate) exit_planned: bool,
    stats: PlannerStats,
    last_rule: Option<Rule>,
}

impl LogicAgent {
    /// A fresh agent on `grid` whose start and exit cell is `origin`.
    pub fn new(grid: Grid, origin: Cell) -> Self {
        Self {
            kb: KnowledgeBase::new(grid, origin),
            origin,
            plan: Plan::new(),
            plan_ready: false,
            exit_planned: false,
            stats: PlannerStats::default(),
            last_rule: None,
        }
    }

    /// A fresh agent starting wherever `env` has placed it.
    pub fn for_environment<E: Environment + ?Sized>(env: &E) -> Self {
        Self::new(*env.grid(), env.position())
    }

    /// Update the beliefs from `env`'s percepts and pick this turn's action.
    pub fn decide_action<E: Environment + ?Sized>(&mut self, env: &E) -> ActionKind {
        self.kb.update(env.position(), env.percepts());
        for rule in Rule::ORDER {
            if let Some(action) = rule.evaluate(self, env) {
                trace!(rule = rule.name(), action = action.name(), "rule fired");
                self.last_rule = Some(rule);
                return action;
            }
        }
        self.last_rule = Some(Rule::Idle);
        ActionKind::Wait
    }

    /// Carry out `action` on `env`.
    ///
    /// Moves, shots and grabs report the environment's answer; turns, waits
    /// and exits always succeed.
    pub fn execute_action<E: Environment + ?Sized>(&self, action: ActionKind, env: &mut E) -> bool {
        match action {
            ActionKind::MoveForward => env.move_forward(),
            ActionKind::TurnLeft => {
                env.turn_left();
                true
            }
            ActionKind::TurnRight => {
                env.turn_right();
                true
            }
            ActionKind::Shoot => env.shoot(),
            ActionKind::GrabGoal => env.grab(),
            ActionKind::Exit | ActionKind::Wait => true,
        }
    }

    /// Plan from `from` facing `heading` to `target`, or to the nearest safe
    /// unexplored cell when `target` is `None`.
    ///
    /// On success the new plan replaces the old one and is marked ready. On
    /// failure the existing plan is left untouched.
    pub fn plan_path(&mut self, from: Cell, heading: Heading, target: Option<Cell>) -> bool {
        let goal = target.map_or(Target::NearestFrontier, Target::Cell);
        match planner::plan_path(&self.kb, from, heading, goal) {
            Some(plan) => {
                trace!(?goal, len = plan.len(), "plan computed");
                self.plan = plan;
                self.plan_ready = true;
                self.stats.computed += 1;
                true
            }
            None => {
                debug!(?goal, %from, %heading, "no route");
                self.stats.failed += 1;
                false
            }
        }
    }

    /// The belief state.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Mutable belief state, for seeding prior knowledge.
    pub fn knowledge_mut(&mut self) -> &mut KnowledgeBase {
        &mut self.kb
    }

    /// The start and exit cell.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Remaining steps of the active plan.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Whether a plan has been computed.
    pub fn plan_ready(&self) -> bool {
        self.plan_ready
    }

    /// Whether the route home has been planned.
    pub fn exit_planned(&self) -> bool {
        self.exit_planned
    }

    /// Planner call counters.
    pub fn planner_stats(&self) -> PlannerStats {
        self.stats
    }

    /// The rule that produced the most recent action.
    pub fn last_rule(&self) -> Option<Rule> {
        self.last_rule
    }
}
