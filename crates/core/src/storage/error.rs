//! Error types for the storage module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while moving files into permanent storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Source file not found.
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The move itself failed.
    #[error("failed to move {from} to {to}: {source}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination directory could not be created.
    #[error("failed to create storage directory: {path}")]
    DirectoryFailed { path: PathBuf },

    /// Other I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Creates a new move error.
    pub fn move_failed(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::MoveFailed {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}
