//! Dataset error types
//!
//! Everything that can go wrong while fetching, parsing or validating the
//! dataset. All of these are terminal for a session.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Reading a local dataset file failed
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fetching a remote dataset failed
    #[error("Failed to fetch dataset: {0}")]
    Http(String),

    /// Fetching a remote dataset timed out
    #[error("Timed out fetching dataset from {0}")]
    Timeout(String),

    /// The document is not valid JSON or does not match the expected shape
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but breaks referential invariants
    #[error("Dataset failed validation ({} problem(s)): {}", problems.len(), problems.join("; "))]
    Validation { problems: Vec<String> },

    /// The configured source is not usable
    #[error("Invalid dataset source: {0}")]
    InvalidSource(String),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
