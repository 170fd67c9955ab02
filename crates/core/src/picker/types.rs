//! Types for the picker module.

use serde::{Deserialize, Serialize};

/// A file chosen through the platform picker dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickedFile {
    /// Locator of the picked file (usually a cache copy).
    pub uri: String,
    /// Display name, including extension.
    pub name: String,
    /// MIME type reported by the platform.
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: u64,
}
