//! Reusable grids and conductivity fields.
//!
//! - [`uniform_field`]: one conductivity everywhere.
//! - [`layered_field`]: conductivity constant per z-layer.
//! - [`lognormal_field`]: seeded, uncorrelated log-normal field.
//! - [`SplitGrid`]: a Cartesian grid cut in two along x.

use mole_core::{CellId, Neighbours, Point3D};
use mole_field::ConductivityField;
use mole_space::{CartesianGrid, Grid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Conductivity `k` on every cell of `grid`.
pub fn uniform_field(grid: &dyn Grid, k: f64) -> ConductivityField {
    ConductivityField::uniform(grid, k).expect("uniform fixture conductivity must be positive")
}

/// Conductivity `layers[iz % layers.len()]` on every cell of layer `iz`.
pub fn layered_field(grid: &CartesianGrid, layers: &[f64]) -> ConductivityField {
    assert!(!layers.is_empty(), "at least one layer value required");
    let values = (0..grid.cell_count())
        .map(|i| {
            let [_, _, iz] = grid.split_id(CellId(i));
            layers[iz % layers.len()]
        })
        .collect();
    ConductivityField::from_values(grid, values).expect("layer values must be positive")
}

/// `exp(sqrt(variance) * z)` per cell with `z` standard normal, drawn from
/// a ChaCha8 stream seeded with `seed`.
pub fn lognormal_field(grid: &dyn Grid, variance: f64, seed: u64) -> ConductivityField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sigma = variance.sqrt();
    let values = (0..grid.cell_count())
        .map(|_| (sigma * box_muller(&mut rng)).exp())
        .collect();
    ConductivityField::from_values(grid, values).expect("log-normal values are positive")
}

/// Standard normal sample via Box-Muller.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// A Cartesian grid with every edge crossing the plane between x-columns
/// `cut - 1` and `cut` removed.
///
/// Cells with `ix < cut` never see cells with `ix >= cut`, so a search
/// seeded on one side leaves the other side unreachable.
pub struct SplitGrid {
    inner: CartesianGrid,
    cut: usize,
}

impl SplitGrid {
    pub fn new(inner: CartesianGrid, cut: usize) -> Self {
        assert!(cut > 0 && cut < inner.nx(), "cut {cut} must split the x-range");
        Self { inner, cut }
    }

    pub fn inner(&self) -> &CartesianGrid {
        &self.inner
    }

    /// Whether `cell` lies on the low-x side of the cut.
    pub fn is_left(&self, cell: CellId) -> bool {
        self.inner.split_id(cell)[0] < self.cut
    }
}

impl Grid for SplitGrid {
    fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    fn cell_count(&self) -> usize {
        self.inner.cell_count()
    }

    fn neighbours(&self, id: CellId) -> Neighbours {
        let side = self.is_left(id);
        let mut out = self.inner.neighbours(id);
        out.retain(|n| self.is_left(*n) == side);
        out
    }

    fn center_of_cell(&self, id: CellId) -> Point3D {
        self.inner.center_of_cell(id)
    }

    fn refinement(&self) -> [usize; 3] {
        self.inner.refinement()
    }

    fn face_count(&self) -> usize {
        self.inner.face_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lognormal_is_deterministic_per_seed() {
        let g = CartesianGrid::new_2d(8, 8, 1.0, 1.0).unwrap();
        let a = lognormal_field(&g, 1.0, 7);
        let b = lognormal_field(&g, 1.0, 7);
        let c = lognormal_field(&g, 1.0, 8);
        assert_eq!(a.as_field().values(), b.as_field().values());
        assert_ne!(a.as_field().values(), c.as_field().values());
    }

    #[test]
    fn layered_field_follows_z() {
        let g = CartesianGrid::new_3d(2, 1, 3, 1.0, 1.0, 1.0).unwrap();
        let k = layered_field(&g, &[1.0, 10.0]);
        assert_eq!(k.as_field().values(), &[1.0, 1.0, 10.0, 10.0, 1.0, 1.0]);
    }

    #[test]
    fn split_grid_has_no_crossing_edges() {
        let g = SplitGrid::new(CartesianGrid::new_2d(4, 3, 1.0, 1.0).unwrap(), 2);
        for i in 0..g.cell_count() {
            let a = CellId(i);
            for b in g.neighbours(a) {
                assert_eq!(g.is_left(a), g.is_left(b));
                assert!(g.neighbours(b).contains(&a));
            }
        }
    }
}
