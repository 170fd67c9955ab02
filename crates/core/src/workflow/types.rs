//! Types for the workflow module.

use serde::{Deserialize, Serialize};

use crate::picker::PickedFile;
use crate::transcoder::ImageFormat;

/// The currently selected source image.
///
/// Replaced wholesale on every successful selection, never mutated in
/// place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceArtifact {
    /// Opaque locator of the picked file.
    pub locator: String,
    /// Display name, including extension.
    pub display_name: String,
    /// MIME type reported by the picker.
    pub media_kind: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Extension derived from the display name, lowercased.
    pub extension: String,
}

impl SourceArtifact {
    /// Builds an artifact from a picker result.
    pub fn from_picked(file: PickedFile) -> Self {
        let extension = file
            .name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Self {
            locator: file.uri,
            display_name: file.name,
            media_kind: file.mime_type,
            size_bytes: file.size_bytes,
            extension,
        }
    }

    /// Whether the artifact is an image and therefore convertible.
    pub fn is_image(&self) -> bool {
        self.media_kind.starts_with("image/")
    }

    /// Human-readable size, e.g. `2.41 MB`.
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// The last successfully produced conversion result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertedArtifact {
    /// Locator of the file in permanent storage.
    pub locator: String,
    /// Generated display name (`converted_<millis>.<ext>`).
    pub display_name: String,
    /// Encoding the file was converted to.
    pub target_format: ImageFormat,
    /// Display name of the source it was converted from.
    pub source_display_name: String,
}

/// Outcome of a selection attempt.
#[derive(Debug, Clone)]
pub enum Selection {
    /// The user picked a file.
    Picked(SourceArtifact),
    /// The user backed out of the dialog. State is untouched.
    Cancelled,
}

/// Progress stages of a conversion run.
///
/// A run walks Accepted -> Dispatched -> Transcoded -> Persisted; any
/// failure drops straight back to Idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStage {
    /// No run in progress.
    #[default]
    Idle,
    /// The request passed its guards.
    Accepted,
    /// The transcode call has been issued.
    Dispatched,
    /// The external service returned re-encoded output.
    Transcoded,
    /// Output moved into permanent storage.
    Persisted,
}

impl ConversionStage {
    /// Progress percentage displayed for this stage.
    pub fn percent(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Accepted => 10,
            Self::Dispatched => 30,
            Self::Transcoded => 70,
            Self::Persisted => 100,
        }
    }
}

/// Notifications emitted by the coordinator for observers (UI or tests).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// A new source was selected; any previous result was cleared.
    SourceSelected { display_name: String },
    /// A conversion run advanced to a new stage.
    ProgressChanged { stage: ConversionStage, percent: u8 },
    /// A conversion run finished and published its artifact.
    ConversionCompleted { artifact: ConvertedArtifact },
    /// A conversion run failed; progress was discarded.
    ConversionFailed {
        stage: ConversionStage,
        message: String,
    },
    /// The converted artifact was saved to the gallery.
    ResultPersisted { album: String, display_name: String },
}
