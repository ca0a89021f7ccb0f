//! Hazard layouts: where the creature, the goal and the pits are.
//!
//! Generation is deterministic: a [`ChaCha8Rng`] seeded from a `u64`
//! produces identical layouts for identical seeds on every platform.

use crate::error::LayoutError;
use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use wumpus_core::Cell;
use wumpus_space::Grid;

/// Default per-cell probability that a free cell holds a pit.
pub const DEFAULT_PIT_PROBABILITY: f64 = 0.2;

/// Ground-truth placement of every object on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// The creature's cell.
    pub creature: Cell,
    /// The goal object's cell.
    pub goal: Cell,
    /// Pit cells, in row-major order for generated layouts.
    pub pits: Vec<Cell>,
}

impl Layout {
    /// A layout without pits.
    pub fn new(creature: Cell, goal: Cell) -> Self {
        Self {
            creature,
            goal,
            pits: Vec::new(),
        }
    }

    /// Add pits to the layout.
    pub fn with_pits(mut self, pits: impl IntoIterator<Item = Cell>) -> Self {
        self.pits.extend(pits);
        self
    }

    /// Check that every object is in bounds, off the origin, and alone on
    /// its cell.
    pub fn validate(&self, grid: &Grid, origin: Cell) -> Result<(), LayoutError> {
        if !grid.contains(origin) {
            return Err(LayoutError::OutOfBounds {
                what: "origin",
                cell: origin,
            });
        }
        let objects = [("creature", self.creature), ("goal", self.goal)]
            .into_iter()
            .chain(self.pits.iter().map(|&p| ("pit", p)));

        let mut occupied = IndexSet::new();
        for (what, cell) in objects {
            if !grid.contains(cell) {
                return Err(LayoutError::OutOfBounds { what, cell });
            }
            if cell == origin {
                return Err(LayoutError::OnOrigin { what });
            }
            if !occupied.insert(cell) {
                return Err(LayoutError::Overlap { cell });
            }
        }
        Ok(())
    }

    /// Generate a random layout from `rng`.
    ///
    /// The creature and then the goal are placed on uniformly chosen free
    /// cells; every remaining cell except the origin independently becomes a
    /// pit with probability `pit_probability`.
    pub fn generate<R: Rng + ?Sized>(
        grid: &Grid,
        origin: Cell,
        pit_probability: f64,
        rng: &mut R,
    ) -> Result<Self, LayoutError> {
        if !grid.contains(origin) {
            return Err(LayoutError::OutOfBounds {
                what: "origin",
                cell: origin,
            });
        }
        if !pit_probability.is_finite() || !(0.0..=1.0).contains(&pit_probability) {
            return Err(LayoutError::InvalidPitProbability {
                value: pit_probability,
            });
        }
        if grid.cell_count() < 3 {
            return Err(LayoutError::GridTooSmall {
                cells: grid.cell_count(),
            });
        }

        let mut free: Vec<Cell> = grid.cells().filter(|&c| c != origin).collect();
        let creature = free.remove(rng.random_range(0..free.len()));
        let goal = free.remove(rng.random_range(0..free.len()));
        let pits = free
            .into_iter()
            .filter(|_| rng.random_bool(pit_probability))
            .collect();

        Ok(Self {
            creature,
            goal,
            pits,
        })
    }

    /// Generate a layout from a `u64` seed.
    pub fn seeded(
        grid: &Grid,
        origin: Cell,
        pit_probability: f64,
        seed: u64,
    ) -> Result<Self, LayoutError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(grid, origin, pit_probability, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid4() -> Grid {
        Grid::square(4).unwrap()
    }

    #[test]
    fn validate_accepts_disjoint_layout() {
        let layout = Layout::new(Cell::new(3, 3), Cell::new(1, 1)).with_pits([Cell::new(2, 0)]);
        assert_eq!(layout.validate(&grid4(), Cell::ORIGIN), Ok(()));
    }

    #[test]
    fn validate_rejects_creature_on_origin() {
        let layout = Layout::new(Cell::ORIGIN, Cell::new(1, 1));
        assert_eq!(
            layout.validate(&grid4(), Cell::ORIGIN),
            Err(LayoutError::OnOrigin { what: "creature" })
        );
    }

    #[test]
    fn validate_rejects_out_of_bounds_pit() {
        let layout = Layout::new(Cell::new(3, 3), Cell::new(1, 1)).with_pits([Cell::new(4, 0)]);
        assert_eq!(
            layout.validate(&grid4(), Cell::ORIGIN),
            Err(LayoutError::OutOfBounds {
                what: "pit",
                cell: Cell::new(4, 0)
            })
        );
    }

    #[test]
    fn validate_rejects_pit_under_goal() {
        let layout = Layout::new(Cell::new(3, 3), Cell::new(1, 1)).with_pits([Cell::new(1, 1)]);
        assert_eq!(
            layout.validate(&grid4(), Cell::ORIGIN),
            Err(LayoutError::Overlap {
                cell: Cell::new(1, 1)
            })
        );
    }

    #[test]
    fn generate_rejects_tiny_grid() {
        let g = Grid::new(1, 2).unwrap();
        assert_eq!(
            Layout::seeded(&g, Cell::ORIGIN, 0.2, 1),
            Err(LayoutError::GridTooSmall { cells: 2 })
        );
    }

    #[test]
    fn generate_rejects_bad_probability() {
        assert!(matches!(
            Layout::seeded(&grid4(), Cell::ORIGIN, 1.5, 1),
            Err(LayoutError::InvalidPitProbability { .. })
        ));
        assert!(matches!(
            Layout::seeded(&grid4(), Cell::ORIGIN, f64::NAN, 1),
            Err(LayoutError::InvalidPitProbability { .. })
        ));
    }

    #[test]
    fn zero_probability_means_no_pits() {
        let layout = Layout::seeded(&grid4(), Cell::ORIGIN, 0.0, 7).unwrap();
        assert!(layout.pits.is_empty());
    }

    #[test]
    fn full_probability_fills_every_free_cell() {
        let layout = Layout::seeded(&grid4(), Cell::ORIGIN, 1.0, 7).unwrap();
        assert_eq!(layout.pits.len(), 16 - 3);
    }

    #[test]
    fn creature_and_goal_reach_every_free_cell() {
        let g = grid4();
        let mut creatures = IndexSet::new();
        let mut goals = IndexSet::new();
        for seed in 0..400 {
            let layout = Layout::seeded(&g, Cell::ORIGIN, 0.0, seed).unwrap();
            creatures.insert(layout.creature);
            goals.insert(layout.goal);
        }
        assert_eq!(creatures.len(), 15);
        assert_eq!(goals.len(), 15);
        assert!(!creatures.contains(&Cell::ORIGIN));
    }

    #[test]
    fn generate_takes_any_rng() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let dynamic: &mut dyn RngCore = &mut rng;
        let layout = Layout::generate(&grid4(), Cell::ORIGIN, 0.3, dynamic).unwrap();
        assert_eq!(layout.validate(&grid4(), Cell::ORIGIN), Ok(()));

        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(
            Layout::generate(&grid4(), Cell::ORIGIN, 0.3, &mut a),
            Layout::generate(&grid4(), Cell::ORIGIN, 0.3, &mut b)
        );
    }

    proptest! {
        #[test]
        fn generated_layouts_are_valid_and_deterministic(
            n in 2u32..9,
            seed in any::<u64>(),
            p in 0.0f64..=1.0,
        ) {
            let g = Grid::square(n).unwrap();
            let a = Layout::seeded(&g, Cell::ORIGIN, p, seed).unwrap();
            let b = Layout::seeded(&g, Cell::ORIGIN, p, seed).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.validate(&g, Cell::ORIGIN), Ok(()));
        }
    }
}
