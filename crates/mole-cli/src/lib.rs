//! Command-line driver for Lazy Mole.
//!
//! Reads `config.json` from a directory, runs the minimum-resistance
//! search from the listed sources, writes the resistance map, and writes
//! the path to whichever target is cheapest to reach.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod ids;

pub use config::{ConfigError, RunConfig, CONFIG_FILE};
pub use driver::{execute, RunSummary};
pub use error::CliError;
