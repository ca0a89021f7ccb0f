//! The priority-ordered decision rules.
//!
//! [`Rule::ORDER`] is evaluated top to bottom each turn; the first rule that
//! yields an action wins. A rule may also act without yielding (the return
//! planner stores a plan and lets the next rule emit its first step).

use std::fmt;

use wumpus_core::{ActionKind, Cell, Heading};
use wumpus_world::Environment;

use crate::agent::LogicAgent;

/// One row of the decision table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Holding the goal at the origin: leave.
    ExitWithGoal,
    /// Glitter here and the goal not yet held: pick it up.
    GrabGoal,
    /// Facing the confirmed creature with the arrow ready: fire.
    ShootConfirmed,
    /// Holding the goal with no return route yet: plan one to the origin.
    PlanReturn,
    /// Pop the next step of the active plan.
    FollowPlan,
    /// Plan to the nearest safe unexplored cell and take its first step.
    Explore,
    /// Nothing left to explore: line up on a creature candidate and fire.
    HuntCandidate,
    /// Wait.
    Idle,
}

impl Rule {
    /// Evaluation order.
    pub const ORDER: [Rule; 8] = [
        Rule::ExitWithGoal,
        Rule::GrabGoal,
        Rule::ShootConfirmed,
        Rule::PlanReturn,
        Rule::FollowPlan,
        Rule::Explore,
        Rule::HuntCandidate,
        Rule::Idle,
    ];

    /// Stable snake_case name, used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Rule::ExitWithGoal => "exit_with_goal",
            Rule::GrabGoal => "grab_goal",
            Rule::ShootConfirmed => "shoot_confirmed",
            Rule::PlanReturn => "plan_return",
            Rule::FollowPlan => "follow_plan",
            Rule::Explore => "explore",
            Rule::HuntCandidate => "hunt_candidate",
            Rule::Idle => "idle",
        }
    }

    /// Apply this rule alone. Does not update the knowledge base first.
    pub fn evaluate<E: Environment + ?Sized>(
        self,
        agent: &mut LogicAgent,
        env: &E,
    ) -> Option<ActionKind> {
        let here = env.position();
        let facing = env.heading();
        match self {
            Rule::ExitWithGoal => {
                (env.holding_goal() && here == agent.origin()).then_some(ActionKind::Exit)
            }
            Rule::GrabGoal => {
                (env.percepts().glitter && !env.holding_goal()).then_some(ActionKind::GrabGoal)
            }
            Rule::ShootConfirmed => {
                let target = agent.knowledge().confirmed_wumpus()?;
                (env.creature_alive() && env.armed() && facing.faces(here, target))
                    .then_some(ActionKind::Shoot)
            }
            Rule::PlanReturn => {
                if !env.holding_goal() || agent.exit_planned() {
                    return None;
                }
                if agent.plan_path(here, facing, Some(agent.origin())) {
                    agent.exit_planned = true;
                    None
                } else {
                    Some(ActionKind::Wait)
                }
            }
            Rule::FollowPlan => {
                if agent.plan_ready() {
                    agent.plan.pop_front()
                } else {
                    None
                }
            }
            Rule::Explore => {
                if agent.plan_path(here, facing, None) {
                    agent.plan.pop_front()
                } else {
                    None
                }
            }
            Rule::HuntCandidate => {
                if !env.armed() || !env.creature_alive() {
                    return None;
                }
                hunt(agent.knowledge().candidate_wumpus(), here, facing)
            }
            Rule::Idle => Some(ActionKind::Wait),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shoot if any candidate lies dead ahead; otherwise turn toward the first
/// candidate sharing a row or column.
fn hunt<'a>(
    candidates: impl IntoIterator<Item = &'a Cell> + Clone,
    here: Cell,
    facing: Heading,
) -> Option<ActionKind> {
    if candidates
        .clone()
        .into_iter()
        .any(|&c| facing.faces(here, c))
    {
        return Some(ActionKind::Shoot);
    }
    candidates
        .into_iter()
        .find_map(|&c| Heading::toward(here, c))
        .map(|want| rotate_toward(facing, want))
}

/// The quarter turn that brings `facing` closest to `want`. A half turn is
/// started clockwise.
pub fn rotate_toward(facing: Heading, want: Heading) -> ActionKind {
    if facing.turned_left() == want {
        ActionKind::TurnLeft
    } else {
        ActionKind::TurnRight
    }
}
