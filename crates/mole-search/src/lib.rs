//! Minimum hydraulic resistance search for Lazy Mole.
//!
//! [`LazyMole`] runs a multi-source, Dijkstra-style label-correcting
//! search over any [`Grid`](mole_space::Grid) weighted by a
//! [`ConductivityField`](mole_field::ConductivityField). Edge weights come
//! from a [`ResistanceModel`]; the default [`SeriesResistance`] treats each
//! edge as two half-cell resistors in series.
//!
//! A completed run yields a [`SearchResult`]: the minimum cumulative
//! resistance of every cell and a shortest-path forest rooted at the
//! sources, from which [`Path`]s are reconstructed.
//!
//! # Example
//!
//! ```
//! use mole_core::CellId;
//! use mole_field::ConductivityField;
//! use mole_search::LazyMole;
//! use mole_space::CartesianGrid;
//!
//! let grid = CartesianGrid::new_2d(4, 4, 1.0, 1.0).unwrap();
//! let field = ConductivityField::uniform(&grid, 1.0).unwrap();
//! let mut mole = LazyMole::new(&grid, &field, &[CellId(0)]).unwrap();
//! let result = mole.run().unwrap();
//!
//! // One diagonal hop of length sqrt(2) through unit conductivity.
//! let r = result.resistance(CellId(5)).unwrap();
//! assert!((r - 2f64.sqrt()).abs() < 1e-12);
//!
//! let path = result.path(CellId(15)).unwrap();
//! assert_eq!(path.target(), CellId(15));
//! assert_eq!(path.source(), CellId(0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod path;
pub mod queue;
pub mod resistance;
pub mod result;
pub mod state;

pub use cancel::CancelToken;
pub use engine::LazyMole;
pub use error::SearchError;
pub use metrics::RunMetrics;
pub use path::Path;
pub use queue::IndexedHeap;
pub use resistance::{edge_resistance, ResistanceModel, SeriesResistance};
pub use result::{SearchResult, UNREACHABLE};
pub use state::Label;
