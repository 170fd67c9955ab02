//! Trait definitions for the picker module.

use async_trait::async_trait;

use super::error::PickerError;
use super::types::PickedFile;

/// The platform file-picker dialog.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Returns the name of this picker implementation.
    fn name(&self) -> &str;

    /// Opens the dialog and suspends until the user picks or cancels.
    ///
    /// Returns `Ok(None)` when the user cancelled.
    async fn pick_image(&self) -> Result<Option<PickedFile>, PickerError>;
}
