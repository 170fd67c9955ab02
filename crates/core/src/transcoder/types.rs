//! Types for the transcoder module.

use serde::{Deserialize, Serialize};

/// Target image encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    /// JPEG (lossy).
    Jpeg,
    /// PNG (lossless).
    Png,
    /// WebP.
    Webp,
}

impl ImageFormat {
    /// Parses a user-facing format token.
    ///
    /// Accepts the token set exposed to users: `JPEG`, `JPG` (alias for
    /// JPEG), `PNG` and `WEBP`, case-insensitively. Anything else is not a
    /// supported target encoding.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "JPEG" | "JPG" => Some(Self::Jpeg),
            "PNG" => Some(Self::Png),
            "WEBP" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Webp => "WEBP",
        };
        write!(f, "{}", token)
    }
}

/// A single transcode request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodeRequest {
    /// Locator of the source image.
    pub input_uri: String,
    /// Target encoding.
    pub format: ImageFormat,
    /// Compression quality in (0.0, 1.0].
    pub quality: f32,
}

/// Result of a successful transcode.
///
/// The output locator points at service-owned scratch storage; the caller is
/// expected to move it into permanent storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodeOutput {
    /// Locator of the re-encoded image.
    pub uri: String,
}
