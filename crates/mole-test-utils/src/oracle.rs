//! Brute-force reference for minimum cumulative resistance.

use mole_core::CellId;
use mole_field::ConductivityField;
use mole_space::Grid;

/// Minimum resistance from any of `sources` to every cell, by
/// Bellman-Ford relaxation until no value changes.
///
/// O(N · E) and independent of any queue, so it serves as an oracle for
/// the search on small grids. Unreached cells are `f64::MAX`.
pub fn reference_resistances(
    grid: &dyn Grid,
    field: &ConductivityField,
    sources: &[CellId],
) -> Vec<f64> {
    let n = grid.cell_count();
    let mut best = vec![f64::MAX; n];
    for s in sources {
        best[s.0] = 0.0;
    }
    for _ in 0..n {
        let mut changed = false;
        for i in 0..n {
            if best[i] == f64::MAX {
                continue;
            }
            let a = CellId(i);
            let pa = grid.center_of_cell(a);
            for b in grid.neighbours(a) {
                let d = pa.distance(&grid.center_of_cell(b));
                let candidate = best[i] + d / (2.0 * field.get(a)) + d / (2.0 * field.get(b));
                if candidate < best[b.0] {
                    best[b.0] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    best
}
