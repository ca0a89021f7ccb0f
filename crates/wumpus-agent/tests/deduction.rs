//! Deduction properties over scripted percept histories.

use proptest::prelude::*;
use wumpus_agent::{plan_path, KnowledgeBase, Target};
use wumpus_core::{Cell, Heading, Percepts};
use wumpus_space::Grid;

fn stench() -> Percepts {
    Percepts {
        stench: true,
        ..Percepts::NONE
    }
}

#[test]
fn lone_suspect_is_eventually_confirmed() {
    // Walk the top row of a 3x3 grid. The creature sits at (1, 2).
    let grid = Grid::square(3).unwrap();
    let mut kb = KnowledgeBase::new(grid, Cell::ORIGIN);
    kb.update(Cell::ORIGIN, Percepts::NONE);
    kb.update(Cell::new(0, 1), Percepts::NONE);
    // Stench at (0, 2): neighbours (0, 1) visited, (1, 2) unknown.
    kb.update(Cell::new(0, 2), stench());
    assert_eq!(kb.confirmed_wumpus(), Some(Cell::new(1, 2)));
    assert!(kb.unsafe_cells().contains(&Cell::new(1, 2)));
    assert!(!kb.is_traversable(Cell::new(1, 2)));
}

#[test]
fn two_suspects_narrow_to_one() {
    let grid = Grid::square(4).unwrap();
    let mut kb = KnowledgeBase::new(grid, Cell::ORIGIN);
    kb.update(Cell::ORIGIN, Percepts::NONE);
    // Stench at (1, 0): candidates (2, 0) and (1, 1).
    kb.update(Cell::new(1, 0), stench());
    assert_eq!(kb.candidate_wumpus().len(), 2);
    // Quiet (0, 1) clears (1, 1).
    kb.update(Cell::new(0, 1), Percepts::NONE);
    kb.update(Cell::new(1, 0), stench());
    assert_eq!(kb.confirmed_wumpus(), Some(Cell::new(2, 0)));
}

#[test]
fn planner_avoids_deduced_hazard() {
    let grid = Grid::square(3).unwrap();
    let mut kb = KnowledgeBase::new(grid, Cell::ORIGIN);
    for c in grid.cells() {
        kb.mark_safe(c);
    }
    let direct = plan_path(&kb, Cell::ORIGIN, Heading::Down, Target::Cell(Cell::new(2, 0))).unwrap();
    assert_eq!(direct.len(), 2);

    let mut kb = KnowledgeBase::new(grid, Cell::ORIGIN);
    for c in grid.cells().filter(|&c| c != Cell::new(1, 0)) {
        kb.mark_safe(c);
    }
    kb.confirm_wumpus(Cell::new(1, 0));
    let around = plan_path(&kb, Cell::ORIGIN, Heading::Down, Target::Cell(Cell::new(2, 0))).unwrap();
    assert!(around.len() > direct.len());
}

proptest! {
    #[test]
    fn walks_keep_beliefs_consistent(
        steps in prop::collection::vec((0usize..4, any::<bool>(), any::<bool>()), 1..60),
    ) {
        let grid = Grid::square(5).unwrap();
        let mut kb = KnowledgeBase::new(grid, Cell::ORIGIN);
        let mut here = Cell::ORIGIN;
        for (dir, stench, breeze) in steps {
            if let Some(next) = grid.forward(here, Heading::ALL[dir]) {
                here = next;
            }
            kb.update(here, Percepts { stench, breeze, ..Percepts::NONE });
            prop_assert_eq!(kb.invariant_violation(), None);
            prop_assert!(kb.visited().iter().all(|c| kb.safe().contains(c)));
        }
    }
}
