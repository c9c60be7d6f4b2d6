//! Benchmark profiles for Lazy Mole.
//!
//! Provides pre-built grid and field pairs for benchmarks:
//!
//! - [`reference_profile`]: 100x100 2D grid (10K cells), log-normal field
//! - [`stress_profile`]: 50x50x40 3D grid (100K cells), log-normal field
//! - [`corner_sources`]: deterministic source placement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mole_core::CellId;
use mole_field::ConductivityField;
use mole_space::CartesianGrid;
use mole_test_utils::lognormal_field;

/// A grid together with a conductivity field over it.
pub struct Profile {
    /// The grid.
    pub grid: CartesianGrid,
    /// Conductivity per cell.
    pub field: ConductivityField,
}

/// 100x100 cells of 1 m, log-conductivity variance 1.
pub fn reference_profile(seed: u64) -> Profile {
    let grid = CartesianGrid::new_2d(100, 100, 1.0, 1.0).expect("valid reference grid");
    let field = lognormal_field(&grid, 1.0, seed);
    Profile { grid, field }
}

/// 50x50x40 cells (100K), anisotropic sizes, log-conductivity variance 2.
///
/// Every interior cell has 26 neighbours, so this profile stresses
/// relaxation and decrease-key far more than the 2D one.
pub fn stress_profile(seed: u64) -> Profile {
    let grid = CartesianGrid::new_3d(50, 50, 40, 2.0, 2.0, 0.5).expect("valid stress grid");
    let field = lognormal_field(&grid, 2.0, seed);
    Profile { grid, field }
}

/// The `n` lowest-id cells of the first x-column: an inflow boundary.
pub fn corner_sources(grid: &CartesianGrid, n: usize) -> Vec<CellId> {
    (0..n.min(grid.ny())).map(|iy| grid.merge_ids(0, iy, 0)).collect()
}
