//! Driver-level errors.

use crate::config::ConfigError;
use mole_field::FieldError;
use mole_search::SearchError;
use mole_space::SpaceError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Anything that stops a driver run.
#[derive(Debug)]
pub enum CliError {
    /// Loading or validating `config.json` failed.
    Config(ConfigError),
    /// The grid could not be built.
    Space(SpaceError),
    /// The conductivity field could not be imported.
    Field {
        /// Field file.
        path: PathBuf,
        /// Underlying error.
        source: FieldError,
    },
    /// The search rejected its inputs or a query failed.
    Search(SearchError),
    /// An input or output file could not be opened, read, or written.
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// An id file holds something other than non-negative integers.
    InvalidId {
        /// Id file.
        path: PathBuf,
        /// The offending token.
        token: String,
        /// 1-based line number.
        line: usize,
    },
    /// None of the targets is reachable from the sources.
    NoReachableTarget {
        /// Number of targets tried.
        targets: usize,
    },
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::Field { path, source } => {
                write!(f, "field '{}': {source}", path.display())
            }
            Self::Search(e) => write!(f, "search: {e}"),
            Self::Io { path, source } => write!(f, "'{}': {source}", path.display()),
            Self::InvalidId { path, token, line } => write!(
                f,
                "'{}' line {line}: '{token}' is not a cell id",
                path.display()
            ),
            Self::NoReachableTarget { targets } => {
                write!(f, "none of the {targets} targets is reachable from the sources")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Field { source, .. } => Some(source),
            Self::Search(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for CliError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
