//! Types for the gallery module.

use serde::{Deserialize, Serialize};

/// Handle to an asset registered with the system media library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetHandle {
    /// Platform-assigned asset id.
    pub id: String,
    /// Locator the asset was created from.
    pub uri: String,
}
