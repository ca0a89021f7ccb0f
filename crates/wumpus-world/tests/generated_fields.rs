//! Seeded fields behave like the layouts they were built from.

use wumpus_core::{Cell, EpisodeStatus, Heading};
use wumpus_space::Grid;
use wumpus_world::{Environment, HazardField, Layout, DEFAULT_PIT_PROBABILITY};

fn seeded_field(seed: u64) -> HazardField {
    let grid = Grid::square(4).unwrap();
    let layout = Layout::seeded(&grid, Cell::ORIGIN, DEFAULT_PIT_PROBABILITY, seed).unwrap();
    HazardField::new(grid, &layout, Cell::ORIGIN, Heading::Right).unwrap()
}

#[test]
fn origin_is_never_lethal() {
    for seed in 0..200 {
        let f = seeded_field(seed);
        assert!(!f.is_lethal(Cell::ORIGIN), "seed {seed}");
        assert_eq!(f.status(), EpisodeStatus::Continuing);
    }
}

#[test]
fn stench_matches_creature_adjacency() {
    for seed in 0..50 {
        let f = seeded_field(seed);
        let adjacent = f.grid().neighbours(Cell::ORIGIN).contains(&f.creature());
        assert_eq!(f.percepts().stench, adjacent, "seed {seed}");
    }
}

#[test]
fn same_seed_same_board() {
    assert_eq!(seeded_field(42).to_string(), seeded_field(42).to_string());
}

#[test]
fn different_seeds_vary_the_board() {
    let boards: std::collections::HashSet<String> =
        (0..20).map(|s| seeded_field(s).to_string()).collect();
    assert!(boards.len() > 1);
}
