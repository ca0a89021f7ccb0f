//! The actions an agent can emit.

use std::fmt;

/// One action per turn.
///
/// `MoveForward`, `TurnLeft` and `TurnRight` are the primitive actions a
/// path plan is built from; the rest are only ever emitted directly by the
/// decision procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ActionKind {
    /// Step one cell along the current heading.
    MoveForward = 0,
    /// Rotate a quarter turn counter-clockwise.
    TurnLeft = 1,
    /// Rotate a quarter turn clockwise.
    TurnRight = 2,
    /// Fire the single arrow along the current heading.
    Shoot = 3,
    /// Pick up the goal object on the current cell.
    GrabGoal = 4,
    /// Leave the grid; only meaningful at the origin while holding the goal.
    Exit = 5,
    /// Do nothing this turn.
    Wait = 6,
}

impl ActionKind {
    /// Number of action kinds.
    pub const COUNT: usize = 7;

    /// All action kinds, in discriminant order.
    pub const ALL: [ActionKind; Self::COUNT] = [
        ActionKind::MoveForward,
        ActionKind::TurnLeft,
        ActionKind::TurnRight,
        ActionKind::Shoot,
        ActionKind::GrabGoal,
        ActionKind::Exit,
        ActionKind::Wait,
    ];

    /// Whether this action can appear inside a path plan.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            ActionKind::MoveForward | ActionKind::TurnLeft | ActionKind::TurnRight
        )
    }

    /// Dense index in `0..COUNT`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::MoveForward => "move_forward",
            ActionKind::TurnLeft => "turn_left",
            ActionKind::TurnRight => "turn_right",
            ActionKind::Shoot => "shoot",
            ActionKind::GrabGoal => "grab_goal",
            ActionKind::Exit => "exit",
            ActionKind::Wait => "wait",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
