//! Breadth-first path planning over `(cell, heading)` states.
//!
//! A forward move and a quarter turn each cost one action, so the shortest
//! action sequence depends on orientation as well as position. The search
//! therefore runs over pose pairs, expanding successors in a fixed order:
//!
//! 1. `MoveForward`, when the cell ahead is in bounds and traversable;
//! 2. `TurnLeft`;
//! 3. `TurnRight`.
//!
//! Among equal-length plans the order above decides, so forward progress is
//! preferred and the same beliefs always yield the same plan.

use std::collections::VecDeque;

use indexmap::map::Entry;
use indexmap::IndexMap;
use smallvec::SmallVec;
use wumpus_core::{ActionKind, Cell, Heading};

use crate::knowledge::KnowledgeBase;

/// A queue of primitive actions, consumed front first.
pub type Plan = VecDeque<ActionKind>;

/// A search node: where the agent stands and which way it faces.
pub type Pose = (Cell, Heading);

/// What the planner is looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A specific cell, reached with any heading.
    Cell(Cell),
    /// The first safe, unvisited cell in breadth-first order.
    NearestFrontier,
}

/// Plan from `start` facing `heading` to `target`, moving only through cells
/// the knowledge base deems traversable.
///
/// Returns `None` when the target cannot be reached, or immediately when
/// [`Target::NearestFrontier`] is requested and no frontier cell exists.
/// A start cell that already satisfies the target yields an empty plan.
pub fn plan_path(
    kb: &KnowledgeBase,
    start: Cell,
    heading: Heading,
    target: Target,
) -> Option<Plan> {
    if target == Target::NearestFrontier && !kb.has_frontier() {
        return None;
    }
    let reached = |cell: Cell| match target {
        Target::Cell(goal) => cell == goal,
        Target::NearestFrontier => kb.is_frontier(cell),
    };

    // Insertion order doubles as the BFS queue; each value links back to
    // the parent's index and the action taken from it.
    let mut seen: IndexMap<Pose, Option<(usize, ActionKind)>> = IndexMap::new();
    seen.insert((start, heading), None);

    let mut cursor = 0;
    while cursor < seen.len() {
        let Some((&(cell, facing), _)) = seen.get_index(cursor) else {
            break;
        };
        if reached(cell) {
            return Some(unwind(&seen, cursor));
        }
        for (action, next) in successors(kb, cell, facing) {
            if let Entry::Vacant(slot) = seen.entry(next) {
                slot.insert(Some((cursor, action)));
            }
        }
        cursor += 1;
    }
    None
}

/// Successor poses of `(cell, facing)` in expansion order.
pub fn successors(
    kb: &KnowledgeBase,
    cell: Cell,
    facing: Heading,
) -> SmallVec<[(ActionKind, Pose); 3]> {
    let mut out = SmallVec::new();
    if let Some(ahead) = kb.grid().forward(cell, facing) {
        if kb.is_traversable(ahead) {
            out.push((ActionKind::MoveForward, (ahead, facing)));
        }
    }
    out.push((ActionKind::TurnLeft, (cell, facing.turned_left())));
    out.push((ActionKind::TurnRight, (cell, facing.turned_right())));
    out
}

fn unwind(seen: &IndexMap<Pose, Option<(usize, ActionKind)>>, mut at: usize) -> Plan {
    let mut plan = Plan::new();
    while let Some((_, Some((parent, action)))) = seen.get_index(at) {
        plan.push_front(*action);
        at = *parent;
    }
    plan
}

/// Replay `plan` from a pose, returning the pose it ends in. Moves that
/// would leave the grid are ignored, as the environment would.
pub fn replay(kb: &KnowledgeBase, start: Pose, plan: &Plan) -> Pose {
    plan.iter().fold(start, |(cell, facing), action| match action {
        ActionKind::MoveForward => (kb.grid().forward(cell, facing).unwrap_or(cell), facing),
        ActionKind::TurnLeft => (cell, facing.turned_left()),
        ActionKind::TurnRight => (cell, facing.turned_right()),
        _ => (cell, facing),
    })
}
