//! Test utilities for Lazy Mole development.
//!
//! Provides conductivity fixtures ([`uniform_field`], [`layered_field`],
//! [`lognormal_field`]), a [`SplitGrid`] whose two halves are not
//! connected, and a brute-force [`reference_resistances`] oracle that the
//! search is checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::{layered_field, lognormal_field, uniform_field, SplitGrid};
pub use oracle::reference_resistances;
