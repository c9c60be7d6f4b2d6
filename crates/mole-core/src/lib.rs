//! Core types for the Lazy Mole minimum-resistance solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers and geometric primitives shared by the rest of the
//! workspace: cell ids, neighbour lists, and 2D/3D points.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod point;

pub use id::{CellId, Neighbours};
pub use point::{Point2D, Point3D};
