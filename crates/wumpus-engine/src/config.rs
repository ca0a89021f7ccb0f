//! Episode configuration, validation, and error types.
//!
//! [`EpisodeConfig`] is the builder-input for constructing an
//! [`Episode`](crate::episode::Episode). [`validate()`](EpisodeConfig::validate)
//! checks every structural invariant up front so that construction itself
//! cannot fail halfway.

use std::error::Error;
use std::fmt;

use wumpus_core::{Cell, Heading};
use wumpus_space::{Grid, SpaceError};
use wumpus_world::{Layout, LayoutError, DEFAULT_PIT_PROBABILITY};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EpisodeConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid could not be built.
    Space(SpaceError),
    /// The fixed layout is invalid, or no layout can be generated.
    Layout(LayoutError),
    /// The start cell lies outside the grid.
    OriginOutOfBounds {
        /// The configured origin.
        origin: Cell,
    },
    /// `pit_probability` is NaN or outside `[0, 1]`.
    InvalidPitProbability {
        /// The invalid value.
        value: f64,
    },
    /// `max_steps` is zero.
    ZeroMaxSteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::OriginOutOfBounds { origin } => {
                write!(f, "origin {origin} lies outside the grid")
            }
            Self::InvalidPitProbability { value } => {
                write!(f, "pit_probability must be in [0.0, 1.0], got {value}")
            }
            Self::ZeroMaxSteps => write!(f, "max_steps must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<LayoutError> for ConfigError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ── EpisodeConfig ──────────────────────────────────────────────────

/// Complete configuration for one episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeConfig {
    /// Side length of the square grid. Default: 4.
    pub grid_size: u32,
    /// Seed for layout generation. Default: 42.
    pub seed: u64,
    /// Per-cell pit probability for generated layouts. Default: 0.2.
    pub pit_probability: f64,
    /// Turn budget before the episode is cut off. Default: 1000.
    pub max_steps: u64,
    /// Start and exit cell. Default: `(0, 0)`.
    pub origin: Cell,
    /// Initial heading. Default: right.
    pub heading: Heading,
    /// Fixed layout. `None` generates one from `seed`.
    pub layout: Option<Layout>,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            seed: 42,
            pit_probability: DEFAULT_PIT_PROBABILITY,
            max_steps: 1000,
            origin: Cell::ORIGIN,
            heading: Heading::Right,
            layout: None,
        }
    }
}

impl EpisodeConfig {
    /// Validate all structural invariants, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be constructible.
        let grid = self.grid()?;
        // 2. Origin inside it.
        if !grid.contains(self.origin) {
            return Err(ConfigError::OriginOutOfBounds {
                origin: self.origin,
            });
        }
        // 3. Pit probability is a probability.
        if !self.pit_probability.is_finite() || !(0.0..=1.0).contains(&self.pit_probability) {
            return Err(ConfigError::InvalidPitProbability {
                value: self.pit_probability,
            });
        }
        // 4. At least one turn.
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        // 5. A fixed layout must fit; a generated one needs room for the
        //    origin, the creature and the goal.
        match &self.layout {
            Some(layout) => layout.validate(&grid, self.origin)?,
            None if grid.cell_count() < 3 => {
                return Err(LayoutError::GridTooSmall {
                    cells: grid.cell_count(),
                }
                .into())
            }
            None => {}
        }
        Ok(())
    }

    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::square(self.grid_size)?)
    }

    /// The fixed layout, or the one generated from `seed`.
    pub fn resolve_layout(&self) -> Result<Layout, ConfigError> {
        match &self.layout {
            Some(layout) => Ok(layout.clone()),
            None => Ok(Layout::seeded(
                &self.grid()?,
                self.origin,
                self.pit_probability,
                self.seed,
            )?),
        }
    }
}
