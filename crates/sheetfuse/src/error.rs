//! Error types for the sheetfuse library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sheetfuse operations.
#[derive(Debug, Error)]
pub enum SheetfuseError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selected column name has no match in the header row.
    #[error("Column '{column}' not found in header")]
    UnresolvableColumn { column: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no table to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for sheetfuse operations.
pub type Result<T> = std::result::Result<T, SheetfuseError>;
