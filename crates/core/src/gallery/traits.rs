//! Trait definitions for the gallery module.

use async_trait::async_trait;

use super::error::GalleryError;
use super::types::AssetHandle;

/// The system media library.
#[async_trait]
pub trait GalleryWriter: Send + Sync {
    /// Returns the name of this gallery implementation.
    fn name(&self) -> &str;

    /// Registers the file at `uri` as a gallery asset.
    async fn create_asset(&self, uri: &str) -> Result<AssetHandle, GalleryError>;

    /// Groups an asset into the named album, creating the album on first
    /// use. Implementations must treat an already-existing album as
    /// success, not failure.
    ///
    /// With `copy = false` the asset is moved into the album rather than
    /// duplicated.
    async fn add_to_album(
        &self,
        album: &str,
        asset: &AssetHandle,
        copy: bool,
    ) -> Result<(), GalleryError>;
}
