//! Wumpus Quickstart: a complete episode from scratch.
//!
//! Demonstrates:
//!   1. Building an EpisodeConfig (generated and fixed layouts)
//!   2. Stepping an Episode turn by turn and reading TurnResults
//!   3. Inspecting the agent's beliefs mid-episode
//!   4. Running to completion and resetting with a new seed
//!
//! Run with:
//!   cargo run --example quickstart

use wumpus_core::Cell;
use wumpus_engine::{Episode, EpisodeConfig};
use wumpus_world::Layout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ─── 1. A fixed layout ──────────────────────────────────────
    let config = EpisodeConfig {
        layout: Some(Layout::new(Cell::new(3, 3), Cell::new(1, 2)).with_pits([Cell::new(2, 0)])),
        ..EpisodeConfig::default()
    };
    let mut episode = Episode::new(config)?;
    println!("{}", episode.field());

    // ─── 2. Step by hand ────────────────────────────────────────
    for _ in 0..5 {
        let Some(turn) = episode.step() else { break };
        println!(
            "turn {:>2}: {:<12} via {:<15} at {} facing {} {}",
            turn.turn, turn.action, turn.rule, turn.position, turn.heading, turn.percepts
        );
    }

    // ─── 3. Beliefs so far ──────────────────────────────────────
    let kb = episode.agent().knowledge();
    println!(
        "visited {} cells, {} safe, {} unsafe, {} pit suspects",
        kb.visited().len(),
        kb.safe().len(),
        kb.unsafe_cells().len(),
        kb.candidate_pit().len()
    );

    // ─── 4. Finish and reset ────────────────────────────────────
    let report = episode.run();
    println!("fixed layout: {} after {} turns", report.outcome, report.turns);

    let mut episode = Episode::new(EpisodeConfig::default())?;
    for seed in [1, 2, 3] {
        episode.reset(seed)?;
        let report = episode.run();
        println!(
            "seed {seed}: {} after {} turns ({} failed actions)",
            report.outcome, report.turns, report.metrics.failed_actions
        );
    }
    Ok(())
}
