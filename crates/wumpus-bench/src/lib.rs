//! Benchmark profiles for the Wumpus-world logic agent.
//!
//! - [`reference_config`]: the classic 4x4 board
//! - [`stress_config`]: a 24x24 board with sparse pits
//! - [`open_knowledge`]: a knowledge base that believes every cell is safe
//! - [`explored_knowledge`]: a knowledge base whose first rows have been
//!   walked without any warning percepts

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wumpus_agent::KnowledgeBase;
use wumpus_core::{Cell, Percepts};
use wumpus_engine::EpisodeConfig;
use wumpus_space::{Grid, SpaceError};

/// Default episode on a 4x4 grid with the given seed.
pub fn reference_config(seed: u64) -> EpisodeConfig {
    EpisodeConfig {
        seed,
        ..EpisodeConfig::default()
    }
}

/// Large, sparse episode: 24x24 grid, 5% pits, 20K turn budget.
pub fn stress_config(seed: u64) -> EpisodeConfig {
    EpisodeConfig {
        grid_size: 24,
        seed,
        pit_probability: 0.05,
        max_steps: 20_000,
        ..EpisodeConfig::default()
    }
}

/// An `n`x`n` knowledge base with every cell marked safe.
pub fn open_knowledge(n: u32) -> Result<KnowledgeBase, SpaceError> {
    let grid = Grid::square(n)?;
    let mut kb = KnowledgeBase::new(grid, Cell::ORIGIN);
    for cell in grid.cells() {
        kb.mark_safe(cell);
    }
    Ok(kb)
}

/// An `n`x`n` knowledge base after visiting rows `0..rows` in a quiet world.
///
/// Row `rows` is then the exploration frontier.
pub fn explored_knowledge(n: u32, rows: u32) -> Result<KnowledgeBase, SpaceError> {
    let grid = Grid::square(n)?;
    let mut kb = KnowledgeBase::new(grid, Cell::ORIGIN);
    for cell in grid.cells().filter(|c| (c.row as u32) < rows) {
        kb.update(cell, Percepts::NONE);
    }
    Ok(kb)
}
