//! Lazy Mole: minimum hydraulic resistance on structured grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Lazy Mole sub-crates. For most users, adding `lazymole` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lazymole::prelude::*;
//!
//! // 3 x 3 cells of 1 m; a slow column in the middle.
//! let grid = CartesianGrid::new_2d(3, 3, 1.0, 1.0).unwrap();
//! let k = vec![1.0, 1e-3, 1.0, 1.0, 1e-3, 1.0, 1.0, 1.0, 1.0];
//! let field = ConductivityField::from_values(&grid, k).unwrap();
//!
//! let mut mole = LazyMole::new(&grid, &field, &[CellId(0)]).unwrap();
//! let result = mole.run().unwrap();
//!
//! // The path to the far side goes around the slow column.
//! let path = result.path(CellId(2)).unwrap();
//! assert!(path.cells().contains(&CellId(7)));
//! assert_eq!(path.source(), CellId(0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mole-core` | Cell ids, points, neighbour lists |
//! | [`space`] | `mole-space` | The `Grid` trait and the Cartesian backend |
//! | [`field`] | `mole-field` | Per-cell fields, conductivity validation, import |
//! | [`search`] | `mole-search` | The resistance search, results and paths |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell ids and geometry primitives (`mole-core`).
pub use mole_core as types;

/// Grid topology (`mole-space`).
///
/// Provides the [`space::Grid`] trait and the [`space::CartesianGrid`]
/// backend with its builder.
pub use mole_space as space;

/// Per-cell fields (`mole-field`).
///
/// [`field::ScalarField`] storage, the validated
/// [`field::ConductivityField`], and text import with the normal-score
/// transform.
pub use mole_field as field;

/// Minimum-resistance search (`mole-search`).
///
/// [`search::LazyMole`] runs the search; [`search::SearchResult`] answers
/// resistance and path queries once it completes.
pub use mole_search as search;

/// Common imports for typical Lazy Mole usage.
///
/// ```rust
/// use lazymole::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mole_core::{CellId, Point3D};

    // Grid
    pub use mole_space::{CartesianGrid, Grid};

    // Fields
    pub use mole_field::{import_conductivity, ConductivityField, ImportOptions, ScalarField};

    // Search
    pub use mole_search::{LazyMole, Path, SearchResult, UNREACHABLE};

    // Errors
    pub use mole_field::FieldError;
    pub use mole_search::SearchError;
    pub use mole_space::SpaceError;
}
