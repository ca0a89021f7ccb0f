//! Per-episode counters.
//!
//! [`EpisodeMetrics`] is updated after every turn and returned in the final
//! [`EpisodeReport`](crate::episode::EpisodeReport).

use wumpus_core::ActionKind;

/// Counters collected over a whole episode.
///
/// Durations are in microseconds and cover only the agent's decision and
/// the environment's response, not logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EpisodeMetrics {
    /// Actions taken, indexed by [`ActionKind::index`].
    pub action_counts: [u64; ActionKind::COUNT],
    /// Actions the environment refused (blocked moves, missed shots,
    /// grabs with nothing underfoot).
    pub failed_actions: u64,
    /// Successful planner calls.
    pub plans_computed: u64,
    /// Planner calls that found no route.
    pub planner_failures: u64,
    /// Distinct cells the agent has stood on.
    pub cells_visited: usize,
    /// Wall-clock time spent stepping, in microseconds.
    pub wall_time_us: u64,
}

impl EpisodeMetrics {
    /// How often `action` was taken.
    pub fn count(&self, action: ActionKind) -> u64 {
        self.action_counts[action.index()]
    }

    /// Total actions taken.
    pub fn total_actions(&self) -> u64 {
        self.action_counts.iter().sum()
    }

    pub(crate) fn record(&mut self, action: ActionKind, success: bool) {
        self.action_counts[action.index()] += 1;
        if !success {
            self.failed_actions += 1;
        }
    }
}
