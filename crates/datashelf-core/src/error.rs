//! Error types for `DataShelf`.
//!
//! Every failure a query can hit maps to one variant here. Messages name the
//! dataset identifier or column the caller supplied and never the resolved
//! file-system path. Error codes follow the pattern `SHELF-XXX`.

use thiserror::Error;

/// Result type alias for `DataShelf` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, loading or filtering a dataset.
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset file does not exist in the data directory (SHELF-001).
    #[error("[SHELF-001] Dataset '{0}' not found")]
    DatasetNotFound(String),

    /// Dataset identifier is not a plain file name (SHELF-002).
    #[error("[SHELF-002] Invalid dataset name '{0}': expected a plain file name")]
    InvalidDatasetName(String),

    /// Filter references a column the dataset does not have (SHELF-003).
    #[error("[SHELF-003] Column '{column}' not found in dataset '{dataset}'")]
    ColumnNotFound {
        /// Dataset identifier.
        dataset: String,
        /// Requested column name.
        column: String,
    },

    /// Dataset file is not valid delimited text (SHELF-004).
    #[error("[SHELF-004] Failed to parse dataset '{dataset}': {message}")]
    Parse {
        /// Dataset identifier.
        dataset: String,
        /// Parser message, without file-system paths.
        message: String,
    },

    /// Unknown response orientation (SHELF-005).
    #[error("[SHELF-005] Invalid orient '{0}'. Valid: records, columns")]
    InvalidOrient(String),

    /// Configuration error (SHELF-006).
    #[error("[SHELF-006] Configuration error: {0}")]
    Config(String),

    /// IO error (SHELF-007).
    #[error("[SHELF-007] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (SHELF-008).
    ///
    /// Indicates an unexpected internal error. Please report if encountered.
    #[error("[SHELF-008] Internal error: {0}")]
    Internal(String),

    /// Request parameter could not be decoded (SHELF-009).
    #[error("[SHELF-009] Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Returns the error code (e.g., "SHELF-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DatasetNotFound(_) => "SHELF-001",
            Self::InvalidDatasetName(_) => "SHELF-002",
            Self::ColumnNotFound { .. } => "SHELF-003",
            Self::Parse { .. } => "SHELF-004",
            Self::InvalidOrient(_) => "SHELF-005",
            Self::Config(_) => "SHELF-006",
            Self::Io(_) => "SHELF-007",
            Self::Internal(_) => "SHELF-008",
            Self::InvalidRequest(_) => "SHELF-009",
        }
    }

    /// Returns true if the error was caused by the request rather than the
    /// data files or the server.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::DatasetNotFound(_)
                | Self::InvalidDatasetName(_)
                | Self::ColumnNotFound { .. }
                | Self::InvalidOrient(_)
                | Self::InvalidRequest(_)
        )
    }

    /// Wraps a `csv` reader error for the given dataset.
    ///
    /// IO failures stay IO errors; everything else becomes [`Error::Parse`].
    pub(crate) fn from_csv(dataset: &str, err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => Self::Io(io),
                other => Self::Internal(format!("unexpected csv error kind: {other:?}")),
            }
        } else {
            Self::Parse {
                dataset: dataset.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Conversion from configuration errors.
impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
