//! Trait definitions for the transcoder module.

use async_trait::async_trait;

use super::error::TranscodeError;
use super::types::{TranscodeOutput, TranscodeRequest};

/// A service that can re-encode an image into a target format.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Re-encodes the image named by the request.
    ///
    /// The returned locator points at scratch storage owned by the service;
    /// callers move it into permanent storage themselves.
    async fn transcode(&self, request: TranscodeRequest)
        -> Result<TranscodeOutput, TranscodeError>;
}
