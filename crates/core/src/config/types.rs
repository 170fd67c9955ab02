use serde::{Deserialize, Serialize};

use crate::ads::AdConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub ads: AdConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// Conversion pipeline configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Compression quality handed to the transcode service, in (0.0, 1.0].
    #[serde(default = "default_quality")]
    pub quality: f32,

    /// Prefix of generated output file names.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            output_prefix: default_output_prefix(),
        }
    }
}

fn default_quality() -> f32 {
    0.9
}

fn default_output_prefix() -> String {
    "converted".to_string()
}

/// Gallery persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryConfig {
    /// Album conversion results are grouped into.
    #[serde(default = "default_album_name")]
    pub album_name: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            album_name: default_album_name(),
        }
    }
}

fn default_album_name() -> String {
    "Conversões".to_string()
}
