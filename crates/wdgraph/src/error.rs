//! Error types for wdgraph operations.
//!
//! Structural mutations report success with a `bool` and traversals report
//! misses with sentinel values, so [`GraphError`] only covers persistence:
//! file I/O and malformed documents.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wdgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for fallible graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A graph file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the file being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The persisted document is not valid JSON or lacks a required field.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A node position is not a list of two or three numbers.
    #[error("Invalid position: {value:?}")]
    InvalidPosition {
        /// The offending position text
        value: String,
    },
}

impl GraphError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Whether this error means the file itself was unavailable, as opposed
    /// to its contents being malformed.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
