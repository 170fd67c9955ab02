//! Error types for the gallery module.

use thiserror::Error;

/// Errors that can occur while writing to the media gallery.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The platform refused to create an asset for the file.
    #[error("asset creation failed: {reason}")]
    AssetCreationFailed { reason: String },

    /// Grouping the asset into an album failed.
    #[error("album write failed for {album}: {reason}")]
    AlbumFailed { album: String, reason: String },
}

impl GalleryError {
    /// Creates a new asset creation error.
    pub fn asset_creation_failed(reason: impl Into<String>) -> Self {
        Self::AssetCreationFailed {
            reason: reason.into(),
        }
    }

    /// Creates a new album write error.
    pub fn album_failed(album: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AlbumFailed {
            album: album.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::album_failed("Conversões", "library unavailable");
        assert_eq!(
            err.to_string(),
            "album write failed for Conversões: library unavailable"
        );
    }
}
