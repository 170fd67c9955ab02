//! Mock gallery for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::gallery::{AssetHandle, GalleryError, GalleryWriter};

/// Mock implementation of the GalleryWriter trait.
///
/// Records created assets and album writes. Album writes are naturally
/// idempotent: repeating one for an existing album just records again.
#[derive(Debug, Clone, Default)]
pub struct MockGallery {
    assets: Arc<RwLock<Vec<AssetHandle>>>,
    album_adds: Arc<RwLock<Vec<(String, String, bool)>>>,
    next_error: Arc<RwLock<Option<GalleryError>>>,
}

impl MockGallery {
    /// Create a new mock gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all assets created so far.
    pub async fn created_assets(&self) -> Vec<AssetHandle> {
        self.assets.read().await.clone()
    }

    /// Get all album writes as (album, asset id, copy) triples.
    pub async fn album_adds(&self) -> Vec<(String, String, bool)> {
        self.album_adds.read().await.clone()
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: GalleryError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<GalleryError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl GalleryWriter for MockGallery {
    fn name(&self) -> &str {
        "mock"
    }

    async fn create_asset(&self, uri: &str) -> Result<AssetHandle, GalleryError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let mut assets = self.assets.write().await;
        let handle = AssetHandle {
            id: format!("asset-{}", assets.len() + 1),
            uri: uri.to_string(),
        };
        assets.push(handle.clone());
        Ok(handle)
    }

    async fn add_to_album(
        &self,
        album: &str,
        asset: &AssetHandle,
        copy: bool,
    ) -> Result<(), GalleryError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.album_adds
            .write()
            .await
            .push((album.to_string(), asset.id.clone(), copy));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repeated_album_writes_succeed() {
        let gallery = MockGallery::new();
        let asset = gallery.create_asset("/store/a.png").await.unwrap();

        gallery.add_to_album("Conversões", &asset, false).await.unwrap();
        gallery.add_to_album("Conversões", &asset, false).await.unwrap();

        assert_eq!(gallery.album_adds().await.len(), 2);
    }
}
