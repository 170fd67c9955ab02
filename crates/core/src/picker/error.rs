//! Error types for the picker module.

use thiserror::Error;

/// Errors that can occur while picking a file.
///
/// User cancellation is not an error; see
/// [`ImagePicker::pick_image`](super::ImagePicker::pick_image).
#[derive(Debug, Error)]
pub enum PickerError {
    /// The platform dialog failed to open or crashed mid-selection.
    #[error("picker failed: {reason}")]
    Failed { reason: String },

    /// I/O error while staging the picked file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PickerError {
    /// Creates a new failed error.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}
