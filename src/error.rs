//! Error types for experiment-pages
//!
//! Every error is local to one source directory: the generator records it
//! against that directory and moves on to the next one.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// experiment-pages error types
#[derive(Error, Debug)]
pub enum Error {
    /// Source directory argument does not exist
    #[error("{} does not exist, skipping", .0.display())]
    MissingSourceDirectory(PathBuf),

    /// Source directory has no metrics.json
    #[error("{} not found, skipping", .0.display())]
    MissingMetricsFile(PathBuf),

    /// Experiment JSON is missing one or more required fields
    #[error("Missing required fields: {missing:?}")]
    Validation {
        /// Absent fields, in schema order
        missing: Vec<String>,
    },

    /// Experiment JSON top-level value is not an object
    #[error("Expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),

    /// Run ID cannot be used as a directory name
    #[error("Run ID {0:?} cannot be used as an artifact directory name")]
    UnsafeRunId(String),

    /// Date cannot be used in a page path
    #[error("Date {0:?} cannot be used in a page path")]
    UnsafeDate(String),

    /// Malformed JSON, a non-string `run_id`/`date` or non-object `metrics`
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the "nothing to process here" kinds, which are reported as
    /// warnings rather than errors.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::MissingSourceDirectory(_) | Self::MissingMetricsFile(_)
        )
    }
}
