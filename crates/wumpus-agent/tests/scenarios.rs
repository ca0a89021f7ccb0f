//! End-to-end scenarios: the agent driving a real hazard field.

use wumpus_agent::{LogicAgent, Rule};
use wumpus_core::{ActionKind, Cell, EpisodeStatus, Heading, Percepts};
use wumpus_test_utils::{corridor_layout, pit_ring_layout, scenario_field, scenario_layout};
use wumpus_world::{Environment, HazardField};

/// Drive `agent` on `field` until the episode ends or `limit` turns pass.
/// Returns the final status and the action trace.
fn drive(
    agent: &mut LogicAgent,
    field: &mut HazardField,
    limit: usize,
) -> (EpisodeStatus, Vec<ActionKind>) {
    let mut trace = Vec::new();
    for _ in 0..limit {
        let action = agent.decide_action(field);
        trace.push(action);
        if action == ActionKind::Exit {
            return (EpisodeStatus::Victory, trace);
        }
        agent.execute_action(action, field);
        let status = field.status();
        if status.is_terminal() {
            return (status, trace);
        }
    }
    (EpisodeStatus::Continuing, trace)
}

#[test]
fn seeded_knowledge_fetches_goal_and_returns() {
    let mut field = scenario_field(&scenario_layout());
    let mut agent = LogicAgent::for_environment(&field);
    let grid = *field.grid();
    for c in grid.cells().filter(|&c| c != Cell::new(3, 3)) {
        agent.knowledge_mut().mark_safe(c);
    }

    let limit = 2 * grid.cell_count();
    let (status, trace) = drive(&mut agent, &mut field, limit);

    assert_eq!(status, EpisodeStatus::Victory, "trace: {trace:?}");
    assert!(trace.len() <= limit);
    assert!(trace.contains(&ActionKind::GrabGoal));
    assert_eq!(agent.knowledge().goal_cell(), Some(Cell::new(1, 1)));
    assert!(field.holding_goal());
    assert_eq!(field.position(), Cell::ORIGIN);
    assert!(agent.exit_planned());
}

#[test]
fn victory_at_origin_emits_exit() {
    let mut field = scenario_field(&scenario_layout());
    let mut agent = LogicAgent::for_environment(&field);
    for c in field.grid().cells().filter(|&c| c != Cell::new(3, 3)) {
        agent.knowledge_mut().mark_safe(c);
    }
    let (status, _) = drive(&mut agent, &mut field, 32);
    assert_eq!(status, EpisodeStatus::Victory);
    // Once home with the goal, the decision is always to leave.
    assert_eq!(agent.decide_action(&field), ActionKind::Exit);
    assert_eq!(agent.last_rule(), Some(Rule::ExitWithGoal));
}

#[test]
fn adjacent_confirmed_creature_is_shot_first() {
    // Creature directly right of the origin; the agent starts facing it.
    let mut field = scenario_field(&wumpus_world::Layout::new(Cell::new(0, 1), Cell::new(2, 2)));
    let mut agent = LogicAgent::for_environment(&field);
    agent.knowledge_mut().confirm_wumpus(Cell::new(0, 1));

    assert_eq!(agent.decide_action(&field), ActionKind::Shoot);
    assert!(agent.execute_action(ActionKind::Shoot, &mut field));
    assert!(!field.creature_alive());
    assert!(field.percepts().scream);

    agent.decide_action(&field);
    assert_eq!(agent.knowledge().confirmed_wumpus(), None);
    assert!(agent.knowledge().candidate_wumpus().is_empty());
}

#[test]
fn explores_without_prior_knowledge() {
    let mut field = scenario_field(&corridor_layout());
    let mut agent = LogicAgent::for_environment(&field);
    let (status, trace) = drive(&mut agent, &mut field, 200);
    assert_eq!(status, EpisodeStatus::Victory, "trace: {trace:?}");
    assert!(agent.knowledge().is_visited(Cell::new(0, 3)));
}

#[test]
fn walled_in_agent_never_steps_into_a_pit() {
    let mut field = scenario_field(&pit_ring_layout());
    let mut agent = LogicAgent::for_environment(&field);
    let (status, trace) = drive(&mut agent, &mut field, 50);
    assert_eq!(status, EpisodeStatus::Continuing);
    assert!(!trace.contains(&ActionKind::MoveForward));
    assert_eq!(field.position(), Cell::ORIGIN);
    assert!(agent.knowledge().unsafe_cells().contains(&Cell::new(0, 1)));
    assert!(agent.knowledge().unsafe_cells().contains(&Cell::new(1, 0)));
}

#[test]
fn same_field_same_trace() {
    let run = || {
        let mut field = scenario_field(&corridor_layout());
        let mut agent = LogicAgent::for_environment(&field);
        drive(&mut agent, &mut field, 200).1
    };
    assert_eq!(run(), run());
}

#[test]
fn bump_does_not_move_the_agent() {
    let mut field = scenario_field(&scenario_layout());
    let agent = LogicAgent::for_environment(&field);
    field.turn_left();
    assert_eq!(field.heading(), Heading::Up);
    assert!(!agent.execute_action(ActionKind::MoveForward, &mut field));
    assert_eq!(field.position(), Cell::ORIGIN);
    assert_eq!(
        field.percepts(),
        Percepts {
            bump: true,
            ..Percepts::NONE
        }
    );
}
