//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of all external collaborator
//! traits, allowing comprehensive workflow testing without platform
//! services.
//!
//! # Example
//!
//! ```rust,ignore
//! use pixelmorph_core::testing::{MockPicker, MockTranscoder, fixtures};
//!
//! let picker = MockPicker::new();
//! picker.push_pick(fixtures::picked_file("photo.heic", "image/heic")).await;
//!
//! let transcoder = MockTranscoder::new();
//! transcoder.set_delay(Duration::from_millis(50)).await;
//!
//! // Wire into a WorkflowCoordinator...
//! ```

mod mock_file_store;
mod mock_gallery;
mod mock_interstitial;
mod mock_permissions;
mod mock_picker;
mod mock_transcoder;

pub use mock_file_store::MockFileStore;
pub use mock_gallery::MockGallery;
pub use mock_interstitial::MockInterstitial;
pub use mock_permissions::MockPermissions;
pub use mock_picker::MockPicker;
pub use mock_transcoder::MockTranscoder;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::picker::PickedFile;

    /// Create a picked file with reasonable defaults.
    pub fn picked_file(name: &str, mime_type: &str) -> PickedFile {
        PickedFile {
            uri: format!("/cache/{}", name),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes: 2 * 1024 * 1024, // 2 MB
        }
    }

    /// Create a picked image file, inferring the MIME type from the name.
    pub fn image_file(name: &str) -> PickedFile {
        let subtype = name.rsplit('.').next().unwrap_or("jpeg").to_ascii_lowercase();
        picked_file(name, &format!("image/{}", subtype))
    }

    /// Create a picked file that is not an image.
    pub fn document_file(name: &str) -> PickedFile {
        picked_file(name, "application/pdf")
    }
}
