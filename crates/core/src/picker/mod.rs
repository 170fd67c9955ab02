//! Image picker collaborator.
//!
//! Wraps the platform file-picker dialog. Cancellation is an ordinary
//! outcome, not an error: `pick_image` returns `None` when the user backs
//! out of the dialog.

mod error;
mod traits;
mod types;

pub use error::PickerError;
pub use traits::ImagePicker;
pub use types::PickedFile;
