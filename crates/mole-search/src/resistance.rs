//! Edge resistance between adjacent cells.

use mole_core::CellId;
use mole_field::ConductivityField;
use mole_space::Grid;

/// Weight of the edge between two adjacent cells.
///
/// Implementations must be symmetric and non-negative; the search relies
/// on both for monotone finalization.
pub trait ResistanceModel {
    /// Resistance of the edge `a`-`b`.
    fn resistance(&self, grid: &dyn Grid, field: &ConductivityField, a: CellId, b: CellId) -> f64;
}

/// Two half-cell resistors in series.
///
/// With `d` the distance between the cell centres and `k` the
/// conductivities:
///
/// ```text
/// R(a, b) = d / (2 k(a)) + d / (2 k(b))
/// ```
///
/// Exact only when the two centres and the midpoint of the shared
/// interface are colinear, as on axis-aligned structured grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeriesResistance;

impl ResistanceModel for SeriesResistance {
    #[inline]
    fn resistance(&self, grid: &dyn Grid, field: &ConductivityField, a: CellId, b: CellId) -> f64 {
        edge_resistance(grid, field, a, b)
    }
}

/// Series resistance of the edge `a`-`b`. See [`SeriesResistance`].
pub fn edge_resistance(grid: &dyn Grid, field: &ConductivityField, a: CellId, b: CellId) -> f64 {
    let d = grid.center_of_cell(a).distance(&grid.center_of_cell(b));
    d / 2.0 / field.get(a) + d / 2.0 / field.get(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mole_space::CartesianGrid;
    use proptest::prelude::*;

    #[test]
    fn uniform_orthogonal_hop_is_distance_over_k() {
        let g = CartesianGrid::new_2d(2, 1, 2.0, 1.0).unwrap();
        let k = ConductivityField::uniform(&g, 4.0).unwrap();
        assert_eq!(edge_resistance(&g, &k, CellId(0), CellId(1)), 0.5);
    }

    #[test]
    fn halves_weighted_by_each_cell() {
        let g = CartesianGrid::new_2d(2, 1, 1.0, 1.0).unwrap();
        let k = ConductivityField::from_values(&g, vec![1.0, 0.25]).unwrap();
        // 1/(2*1) + 1/(2*0.25) = 0.5 + 2.0
        assert_eq!(edge_resistance(&g, &k, CellId(0), CellId(1)), 2.5);
    }

    #[test]
    fn diagonal_uses_euclidean_distance() {
        let g = CartesianGrid::new_3d(2, 2, 2, 1.0, 2.0, 2.0).unwrap();
        let k = ConductivityField::uniform(&g, 1.0).unwrap();
        let r = SeriesResistance.resistance(&g, &k, CellId(0), CellId(7));
        assert!((r - 3.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn symmetric_for_every_adjacent_pair(
            values in proptest::collection::vec(0.01f64..100.0, 18),
            dx in 0.1f64..10.0, dy in 0.1f64..10.0, dz in 0.1f64..10.0,
        ) {
            let g = CartesianGrid::new_3d(3, 3, 2, dx, dy, dz).unwrap();
            let k = ConductivityField::from_values(&g, values).unwrap();
            for i in 0..g.cell_count() {
                let a = CellId(i);
                for b in g.neighbours(a) {
                    let ab = edge_resistance(&g, &k, a, b);
                    let ba = edge_resistance(&g, &k, b, a);
                    prop_assert!(ab > 0.0);
                    prop_assert_eq!(ab, ba);
                }
            }
        }
    }
}
