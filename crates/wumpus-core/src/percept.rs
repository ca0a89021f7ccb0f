//! Local percepts reported by the environment each turn.

use std::fmt;

/// The five Boolean percepts available to the agent at its current cell.
///
/// The agent never sees the grid itself; these flags are the only evidence
/// the knowledge base receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Percepts {
    /// Warning A: the creature occupies an orthogonal neighbour.
    pub stench: bool,
    /// Warning B: a pit occupies an orthogonal neighbour.
    pub breeze: bool,
    /// The goal object lies on the current cell.
    pub glitter: bool,
    /// The last forward move hit the boundary.
    pub bump: bool,
    /// The last shot killed the creature.
    pub scream: bool,
}

impl Percepts {
    /// No percept active.
    pub const NONE: Percepts = Percepts {
        stench: false,
        breeze: false,
        glitter: false,
        bump: false,
        scream: false,
    };

    /// Whether no percept is active.
    pub fn is_quiet(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Percepts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.stench, "stench"),
            (self.breeze, "breeze"),
            (self.glitter, "glitter"),
            (self.bump, "bump"),
            (self.scream, "scream"),
        ];
        let mut first = true;
        f.write_str("[")?;
        for (_, name) in flags.iter().filter(|(on, _)| *on) {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        f.write_str("]")
    }
}
