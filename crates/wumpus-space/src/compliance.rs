//! Grid topology compliance test helpers.
//!
//! These functions verify the invariants every caller of [`Grid`] relies on:
//! symmetric neighbourhoods, metric distance, and a complete, deterministic
//! canonical ordering.

use crate::grid::Grid;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(grid: &Grid) {
    for cell in grid.cells() {
        let d = grid.distance(cell, cell);
        assert_eq!(d, 0, "distance({cell}, {cell}) = {d}, expected 0");
    }
}

/// Assert that every neighbour is at distance exactly 1.
pub fn assert_neighbours_adjacent(grid: &Grid) {
    for cell in grid.cells() {
        for nb in grid.neighbours(cell) {
            assert_eq!(
                grid.distance(cell, nb),
                1,
                "neighbour {nb} of {cell} is not adjacent"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for cell in grid.cells() {
        for nb in grid.neighbours(cell) {
            assert!(
                grid.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that `cells()` yields exactly `cell_count` unique in-bounds cells,
/// each at its canonical rank.
pub fn assert_canonical_ordering_complete(grid: &Grid) {
    let ordering: Vec<_> = grid.cells().collect();
    assert_eq!(
        ordering.len(),
        grid.cell_count(),
        "cells() length ({}) != cell_count ({})",
        ordering.len(),
        grid.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "cells() has duplicates");
    for (i, cell) in ordering.iter().enumerate() {
        assert!(grid.contains(*cell), "{cell} yielded but out of bounds");
        assert_eq!(grid.canonical_rank(*cell), Some(i));
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_distance_reflexive(grid);
    assert_neighbours_adjacent(grid);
    assert_neighbours_symmetric(grid);
    assert_canonical_ordering_complete(grid);
}
