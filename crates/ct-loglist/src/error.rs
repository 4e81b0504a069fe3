//! Log list error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for log list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Log list error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// A document, log, or operator entry lacks a required attribute.
    #[error("missing field `{field}` in {entry} entry #{index}")]
    MissingField {
        /// Kind of entry (`document`, `log` or `operator`).
        entry: &'static str,
        /// Position of the entry within its collection.
        index: usize,
        /// Name of the missing attribute.
        field: &'static str,
    },

    /// Public key material is not valid base64 or PEM.
    #[error("key decoding failed: {0}")]
    Decoding(String),

    /// The registry document is not valid JSON or has the wrong shape.
    #[error("log list document parsing failed: {0}")]
    DocumentParse(#[from] serde_json::Error),

    /// Downloading the registry document failed.
    #[error("log list download failed: {0}")]
    Transport(String),

    /// The local registry file exists but could not be read.
    #[error("failed to read log list {}: {source}", .path.display())]
    Io {
        /// Path of the local registry file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
