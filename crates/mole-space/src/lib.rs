//! Grid topology and geometry for Lazy Mole.
//!
//! This crate defines the [`Grid`] trait, the capability interface through
//! which the resistance search sees the domain, along with the concrete
//! [`CartesianGrid`] backend.
//!
//! # Backends
//!
//! - [`CartesianGrid`]: axis-aligned structured grid, 2D (8-connected) or
//!   3D (26-connected), with per-axis refinement and an arbitrary origin.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cartesian;
pub mod direction;
pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use cartesian::{CartesianGrid, CartesianGridBuilder};
pub use direction::Direction;
pub use error::SpaceError;
pub use grid::Grid;
