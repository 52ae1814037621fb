//! Error types for carval-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the carval-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a filesystem failure while reading or writing.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a file is not the expected JSON shape.
    #[error("invalid JSON in {}: {reason}", path.display())]
    Json {
        /// Path of the malformed file.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when serializing a result fails.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },

    /// Returned when one or more dataset validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}
