//! Turn-based episode runner.
//!
//! [`Episode`] is the primary user-facing API. Each call to
//! [`step()`](Episode::step) runs one complete turn: the agent updates its
//! beliefs from the current percepts, picks an action through its decision
//! table, and the hazard field applies it and recomputes percepts.
//!
//! # Ownership model
//!
//! The episode owns both the field and the agent. The field is lent to the
//! agent by reference for the decision and by mutable reference for the
//! action, so the agent never holds on to ground truth between turns.

use std::fmt;
use std::time::Instant;

use tracing::{info, warn};
use wumpus_agent::{LogicAgent, Rule};
use wumpus_core::{ActionKind, Cell, EpisodeStatus, Heading, Percepts};
use wumpus_world::{Environment, HazardField};

use crate::config::{ConfigError, EpisodeConfig};
use crate::metrics::EpisodeMetrics;

// ── Outcome ────────────────────────────────────────────────────────

/// How an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The agent brought the goal back to the origin.
    Victory,
    /// The agent entered a pit or the living creature's cell.
    Defeat,
    /// The turn budget ran out.
    StepLimit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Victory => write!(f, "victory"),
            Self::Defeat => write!(f, "defeat"),
            Self::StepLimit => write!(f, "step limit reached"),
        }
    }
}

// ── TurnResult ─────────────────────────────────────────────────────

/// What happened during one [`Episode::step()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnResult {
    /// 1-based turn number.
    pub turn: u64,
    /// The action the agent chose.
    pub action: ActionKind,
    /// The decision rule that produced it.
    pub rule: Rule,
    /// Whether the environment accepted it.
    pub success: bool,
    /// Agent position after the action.
    pub position: Cell,
    /// Agent heading after the action.
    pub heading: Heading,
    /// Percepts after the action.
    pub percepts: Percepts,
    /// Episode status after the action.
    pub status: EpisodeStatus,
}

/// Summary returned by [`Episode::run()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeReport {
    /// How the episode ended.
    pub outcome: Outcome,
    /// Turns played.
    pub turns: u64,
    /// Counters accumulated over the episode.
    pub metrics: EpisodeMetrics,
}

// ── Episode ────────────────────────────────────────────────────────

/// A single agent exploring a single hazard field.
///
/// Created from an [`EpisodeConfig`] via [`new()`](Episode::new).
///
/// # Example
///
/// ```
/// use wumpus_engine::{Episode, EpisodeConfig};
///
/// let mut episode = Episode::new(EpisodeConfig::default()).unwrap();
/// let report = episode.run();
/// assert!(report.turns <= 1000);
/// ```
pub struct Episode {
    config: EpisodeConfig,
    field: HazardField,
    agent: LogicAgent,
    turn: u64,
    outcome: Option<Outcome>,
    metrics: EpisodeMetrics,
}

impl Episode {
    /// Validate `config`, lay out the field and place a fresh agent on it.
    pub fn new(config: EpisodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (field, agent) = Self::build(&config)?;
        let episode = Self {
            config,
            field,
            agent,
            turn: 0,
            outcome: None,
            metrics: EpisodeMetrics::default(),
        };
        episode.log_start();
        Ok(episode)
    }

    fn build(config: &EpisodeConfig) -> Result<(HazardField, LogicAgent), ConfigError> {
        let layout = config.resolve_layout()?;
        let field = HazardField::new(config.grid()?, &layout, config.origin, config.heading)?;
        let agent = LogicAgent::for_environment(&field);
        Ok((field, agent))
    }

    fn log_start(&self) {
        info!(
            seed = self.config.seed,
            grid_size = self.config.grid_size,
            max_steps = self.config.max_steps,
            fixed_layout = self.config.layout.is_some(),
            "episode started"
        );
    }

    /// Play one turn. Returns `None` once the episode has ended.
    pub fn step(&mut self) -> Option<TurnResult> {
        if self.outcome.is_some() {
            return None;
        }
        let started = Instant::now();
        self.turn += 1;

        let action = self.agent.decide_action(&self.field);
        let rule = self.agent.last_rule().unwrap_or(Rule::Idle);
        let mut success = self.agent.execute_action(action, &mut self.field);
        let status = self.field.status();
        if action == ActionKind::Exit && status != EpisodeStatus::Victory {
            // Leaving without the goal, or away from the origin, does nothing.
            success = false;
        }

        self.metrics.record(action, success);
        let stats = self.agent.planner_stats();
        self.metrics.plans_computed = stats.computed;
        self.metrics.planner_failures = stats.failed;
        self.metrics.cells_visited = self.agent.knowledge().visited().len();
        self.metrics.wall_time_us += started.elapsed().as_micros() as u64;

        let result = TurnResult {
            turn: self.turn,
            action,
            rule,
            success,
            position: self.field.position(),
            heading: self.field.heading(),
            percepts: self.field.percepts(),
            status,
        };
        info!(
            turn = result.turn,
            position = %result.position,
            heading = %result.heading,
            action = %action,
            rule = %rule,
            success,
            percepts = %result.percepts,
            "turn"
        );
        if !success {
            warn!(turn = self.turn, action = %action, "action failed");
        }

        self.outcome = match status {
            EpisodeStatus::Victory => Some(Outcome::Victory),
            EpisodeStatus::Defeat => Some(Outcome::Defeat),
            EpisodeStatus::Continuing if self.turn >= self.config.max_steps => {
                Some(Outcome::StepLimit)
            }
            EpisodeStatus::Continuing => None,
        };
        if let Some(outcome) = self.outcome {
            info!(
                %outcome,
                turns = self.turn,
                visited = self.metrics.cells_visited,
                "episode finished"
            );
        }
        Some(result)
    }

    /// Step until the episode ends.
    pub fn run(&mut self) -> EpisodeReport {
        while self.step().is_some() {}
        self.report()
    }

    /// Summary of the episode so far. `outcome` is
    /// [`StepLimit`](Outcome::StepLimit) while the episode is still running.
    pub fn report(&self) -> EpisodeReport {
        EpisodeReport {
            outcome: self.outcome.unwrap_or(Outcome::StepLimit),
            turns: self.turn,
            metrics: self.metrics.clone(),
        }
    }

    /// Restart with a new seed.
    ///
    /// A generated layout is regenerated from `seed`; a fixed layout is kept.
    /// The agent starts over with empty beliefs and all counters reset.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.config.seed = seed;
        let (field, agent) = Self::build(&self.config)?;
        self.field = field;
        self.agent = agent;
        self.turn = 0;
        self.outcome = None;
        self.metrics = EpisodeMetrics::default();
        self.log_start();
        Ok(())
    }

    /// The ground-truth field.
    pub fn field(&self) -> &HazardField {
        &self.field
    }

    /// The agent.
    pub fn agent(&self) -> &LogicAgent {
        &self.agent
    }

    /// Mutable agent, for seeding prior knowledge before the first turn.
    pub fn agent_mut(&mut self) -> &mut LogicAgent {
        &mut self.agent
    }

    /// Turns played so far (0 after construction or reset).
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// How the episode ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The active configuration.
    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// Counters so far.
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }
}

impl fmt::Debug for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Episode")
            .field("turn", &self.turn)
            .field("seed", &self.config.seed)
            .field("outcome", &self.outcome)
            .field("position", &self.field.position())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_test_utils::{pit_ring_layout, scenario_layout};
    use wumpus_world::Layout;

    fn fixed(layout: Layout) -> EpisodeConfig {
        EpisodeConfig {
            layout: Some(layout),
            ..EpisodeConfig::default()
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = EpisodeConfig {
            max_steps: 0,
            ..EpisodeConfig::default()
        };
        assert_eq!(Episode::new(cfg).unwrap_err(), ConfigError::ZeroMaxSteps);
    }

    #[test]
    fn first_step_is_turn_one() {
        let mut ep = Episode::new(fixed(scenario_layout())).unwrap();
        assert_eq!(ep.turn(), 0);
        let r = ep.step().unwrap();
        assert_eq!(r.turn, 1);
        assert_eq!(ep.metrics().total_actions(), 1);
    }

    #[test]
    fn stalled_episode_hits_step_limit() {
        let cfg = EpisodeConfig {
            max_steps: 25,
            ..fixed(pit_ring_layout())
        };
        let mut ep = Episode::new(cfg).unwrap();
        let report = ep.run();
        assert_eq!(report.outcome, Outcome::StepLimit);
        assert_eq!(report.turns, 25);
        assert_eq!(report.metrics.count(ActionKind::Wait), 25);
        assert!(ep.step().is_none());
    }

    #[test]
    fn seeded_knowledge_reaches_victory() {
        let mut ep = Episode::new(fixed(scenario_layout())).unwrap();
        let cells: Vec<_> = ep.field().grid().cells().collect();
        for c in cells.into_iter().filter(|&c| c != Cell::new(3, 3)) {
            ep.agent_mut().knowledge_mut().mark_safe(c);
        }
        let report = ep.run();
        assert_eq!(report.outcome, Outcome::Victory);
        assert!(report.turns <= 32);
        assert_eq!(report.metrics.count(ActionKind::GrabGoal), 1);
        assert!(report.metrics.plans_computed > 0);
    }

    #[test]
    fn walking_into_creature_is_defeat() {
        // Only possible when the agent is misinformed.
        let mut ep = Episode::new(fixed(Layout::new(Cell::new(0, 1), Cell::new(3, 3)))).unwrap();
        ep.agent_mut().knowledge_mut().mark_safe(Cell::new(0, 1));
        let mut env_turns = 0;
        while let Some(r) = ep.step() {
            env_turns += 1;
            if r.status.is_terminal() {
                break;
            }
        }
        assert!(env_turns >= 1);
        assert_eq!(ep.outcome(), Some(Outcome::Defeat));
    }

    #[test]
    fn reset_keeps_fixed_layout_and_clears_counters() {
        let mut ep = Episode::new(fixed(scenario_layout())).unwrap();
        ep.step();
        ep.reset(7).unwrap();
        assert_eq!(ep.turn(), 0);
        assert_eq!(ep.outcome(), None);
        assert_eq!(ep.metrics(), &EpisodeMetrics::default());
        assert_eq!(ep.field().creature(), Cell::new(3, 3));
        assert_eq!(ep.config().seed, 7);
    }
}
