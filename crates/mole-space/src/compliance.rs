//! Grid trait compliance test helpers.
//!
//! These functions verify that a Grid implementation satisfies the
//! invariants required by the trait contract and by the resistance model.

use crate::grid::Grid;
use indexmap::IndexSet;
use mole_core::CellId;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &dyn Grid) {
    for i in 0..grid.cell_count() {
        let id = CellId(i);
        for nb in grid.neighbours(id) {
            assert!(
                grid.neighbours(nb).contains(&id),
                "neighbour symmetry violated: {nb} in N({id}) but {id} not in N({nb})"
            );
        }
    }
}

/// Assert that no cell lists itself or an out-of-range id, and that
/// neighbour lists contain no duplicates.
pub fn assert_neighbours_well_formed(grid: &dyn Grid) {
    let n = grid.cell_count();
    let max_degree = if grid.ndim() == 2 { 8 } else { 26 };
    for i in 0..n {
        let id = CellId(i);
        let nbs = grid.neighbours(id);
        assert!(nbs.len() <= max_degree, "{id} has {} neighbours", nbs.len());
        let unique: IndexSet<_> = nbs.iter().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {id}");
        for nb in &nbs {
            assert_ne!(*nb, id, "{id} lists itself as a neighbour");
            assert!(nb.0 < n, "{id} has out-of-range neighbour {nb}");
        }
    }
}

/// Assert that two calls to `neighbours` return the same sequence.
pub fn assert_neighbours_deterministic(grid: &dyn Grid) {
    for i in 0..grid.cell_count() {
        let id = CellId(i);
        assert_eq!(grid.neighbours(id), grid.neighbours(id));
    }
}

/// Assert that adjacent cells have distinct, finite centres.
///
/// A zero distance would make the series resistance of the edge zero and
/// collapse the search onto a single point.
pub fn assert_adjacent_centres_distinct(grid: &dyn Grid) {
    for i in 0..grid.cell_count() {
        let id = CellId(i);
        let c = grid.center_of_cell(id);
        assert!(c.is_finite(), "centre of {id} is not finite: {c}");
        for nb in grid.neighbours(id) {
            let d = c.distance(&grid.center_of_cell(nb));
            assert!(d > 0.0, "cells {id} and {nb} share a centre");
        }
    }
}

/// Assert that every cell has a distinct centre.
pub fn assert_centres_unique(grid: &dyn Grid) {
    let unique: IndexSet<_> = (0..grid.cell_count())
        .map(|i| {
            let c = grid.center_of_cell(CellId(i));
            (c.x.to_bits(), c.y.to_bits(), c.z.to_bits())
        })
        .collect();
    assert_eq!(unique.len(), grid.cell_count(), "duplicate cell centres");
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &dyn Grid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_well_formed(grid);
    assert_neighbours_deterministic(grid);
    assert_adjacent_centres_distinct(grid);
    assert_centres_unique(grid);
}
