//! Error types for the bibcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bibcheck operations.
///
/// Per-reference failures never surface through this type: the verifier
/// folds them into an `UNCERTAIN` result. These errors cover setup,
/// provider transport, run-level and persistence failures.
#[derive(Debug, Error)]
pub enum BibcheckError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error (missing credentials, bad client setup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The model provider rejected or failed the request.
    #[error("API error: {0}")]
    Api(String),

    /// The model provider answered without any text.
    #[error("Empty response from model provider")]
    EmptyResponse,

    /// Segmentation produced nothing to verify.
    #[error("No valid references found in input.")]
    NoReferences,

    /// Error saving or loading a run report.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bibcheck operations.
pub type Result<T> = std::result::Result<T, BibcheckError>;
