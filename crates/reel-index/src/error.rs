//! Error types for the reel-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when working with the search index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Bad caller input: empty document id, invalid pagination, malformed
    /// filter combination. Surfaced synchronously, never retried.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The on-disk index structure is unreadable or incompatible.
    ///
    /// Fatal for the current process path: the caller must rebuild the
    /// index from source data (clear + re-ingest).
    #[error("index store corrupted at {path}: {message}")]
    StoreCorruption {
        /// Path to the corrupted segment file.
        path: PathBuf,
        /// What made the file unreadable.
        message: String,
    },

    /// Failed to open or create the index directory.
    #[error("failed to open index at {path}: {message}")]
    OpenIndex {
        /// Path to the index directory.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// A film catalog file could not be parsed.
    #[error("failed to parse catalog {path}: {message}")]
    ParseCatalog {
        /// Path to the catalog file.
        path: PathBuf,
        /// What the parser rejected.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid stemmer language.
    #[error("unsupported stemmer language: {0}")]
    InvalidLanguage(String),
}

impl IndexError {
    /// Creates a `Validation` error.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a `StoreCorruption` error for a segment file.
    pub(crate) fn corruption(path: PathBuf, message: impl Into<String>) -> Self {
        Self::StoreCorruption {
            path,
            message: message.into(),
        }
    }
}
