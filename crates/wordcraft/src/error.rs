//! Error types for the wordcraft library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wordcraft operations.
#[derive(Debug, Error)]
pub enum WordcraftError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A corpus file could not be parsed or written.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Empty file or no words to process.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error (bad config file, missing credentials).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote document store rejected a request.
    #[error("Document store error ({status}): {message}")]
    Store { status: u16, message: String },

    /// A required external service did not answer as expected.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// A post-condition self-check failed.
    #[error("Verification failed: {0}")]
    Verification(String),
}

impl WordcraftError {
    /// Build an [`WordcraftError::Io`] for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for wordcraft operations.
pub type Result<T> = std::result::Result<T, WordcraftError>;
