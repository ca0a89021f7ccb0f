//! Episode status as reported by the environment.

use std::fmt;

/// Whether an episode is still running and, if not, how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EpisodeStatus {
    /// The agent is alive and has not yet returned with the goal.
    Continuing,
    /// The agent is back at the origin holding the goal.
    Victory,
    /// The agent entered a pit or the living creature's cell.
    Defeat,
}

impl EpisodeStatus {
    /// `true` for [`Victory`](Self::Victory) and [`Defeat`](Self::Defeat).
    pub fn is_terminal(self) -> bool {
        !matches!(self, EpisodeStatus::Continuing)
    }
}

impl fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuing => write!(f, "continuing"),
            Self::Victory => write!(f, "victory"),
            Self::Defeat => write!(f, "defeat"),
        }
    }
}
