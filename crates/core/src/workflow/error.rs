//! Error types for the workflow module.
//!
//! Every conversion-path failure resets progress and the in-flight flag
//! before it surfaces; none of them can leave a partially-written result
//! behind. Ad failures are absent on purpose: they never become workflow
//! errors.

use thiserror::Error;

/// Errors surfaced by the workflow coordinator.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A conversion was requested with no source selected.
    #[error("no source selected")]
    NoSourceSelected,

    /// The selected source is not an image.
    #[error("unsupported media kind: {0}")]
    UnsupportedMediaKind(String),

    /// The requested target format is not supported.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A conversion is already running; the request was rejected, not
    /// queued.
    #[error("a conversion is already in flight")]
    AlreadyInFlight,

    /// Persistence was requested with no converted artifact.
    #[error("nothing to save")]
    NothingToSave,

    /// The picker dialog failed (distinct from user cancellation).
    #[error("selection failed: {0}")]
    SelectionFailed(String),

    /// The external transcode call failed.
    #[error("transcode failed: {0}")]
    TranscodeFailure(String),

    /// Moving the output or writing to the gallery failed.
    #[error("persistence failed: {0}")]
    PersistenceFailure(String),

    /// The user declined gallery-write permission.
    #[error("gallery permission denied")]
    PermissionDenied,
}
