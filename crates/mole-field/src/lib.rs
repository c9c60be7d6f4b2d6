//! Per-cell scalar fields for Lazy Mole.
//!
//! - [`ScalarField`]: dense, index-aligned container of one value per cell.
//! - [`ConductivityField`]: a validated `ScalarField<f64>` whose values are
//!   usable as denominators by the resistance model.
//! - [`import_conductivity`]: text import with block-constant upsampling
//!   onto a refined [`CartesianGrid`](mole_space::CartesianGrid) and
//!   optional log / normal-score transforms.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conductivity;
pub mod error;
pub mod import;
pub mod scalar;
pub mod transform;

pub use conductivity::ConductivityField;
pub use error::FieldError;
pub use import::{import_conductivity, import_scalar, ImportOptions};
pub use scalar::ScalarField;
pub use transform::{erf, erf_inv, normal_score, Connectivity};
