//! Error types for the transcoder module.

use thiserror::Error;

/// Errors that can occur during transcoding.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// Input file not found.
    #[error("input not found: {uri}")]
    InputNotFound { uri: String },

    /// The service rejected or failed the transcode.
    #[error("transcode failed: {reason}")]
    Failed { reason: String },

    /// I/O error while reading or writing image data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscodeError {
    /// Creates a new failed error from an opaque service message.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}
