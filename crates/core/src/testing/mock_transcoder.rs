//! Mock transcoder for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::transcoder::{TranscodeError, TranscodeOutput, TranscodeRequest, Transcoder};

/// Mock implementation of the Transcoder trait.
///
/// Provides controllable behavior for testing:
/// - Track transcode requests for assertions
/// - Simulate success/failure
/// - Simulate slow conversions (for mutual-exclusion tests)
#[derive(Debug, Clone, Default)]
pub struct MockTranscoder {
    recorded: Arc<RwLock<Vec<TranscodeRequest>>>,
    next_error: Arc<RwLock<Option<TranscodeError>>>,
    delay_ms: Arc<RwLock<u64>>,
}

impl MockTranscoder {
    /// Create a new mock transcoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded requests.
    pub async fn recorded_requests(&self) -> Vec<TranscodeRequest> {
        self.recorded.read().await.clone()
    }

    /// Number of transcodes performed (including failed ones).
    pub async fn transcode_count(&self) -> usize {
        self.recorded.read().await.len()
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: TranscodeError) {
        *self.next_error.write().await = Some(error);
    }

    /// Set the simulated transcode duration.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay_ms.write().await = delay.as_millis() as u64;
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn transcode(
        &self,
        request: TranscodeRequest,
    ) -> Result<TranscodeOutput, TranscodeError> {
        self.recorded.write().await.push(request.clone());

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        let delay_ms = *self.delay_ms.read().await;
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let sequence = self.recorded.read().await.len();
        Ok(TranscodeOutput {
            uri: format!("/scratch/transcoded_{}.{}", sequence, request.format.extension()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcoder::ImageFormat;

    #[tokio::test]
    async fn test_records_requests() {
        let transcoder = MockTranscoder::new();
        let output = transcoder
            .transcode(TranscodeRequest {
                input_uri: "/cache/a.heic".to_string(),
                format: ImageFormat::Png,
                quality: 0.9,
            })
            .await
            .unwrap();

        assert!(output.uri.ends_with(".png"));
        assert_eq!(transcoder.transcode_count().await, 1);
    }

    #[tokio::test]
    async fn test_next_error_fails_once() {
        let transcoder = MockTranscoder::new();
        transcoder
            .set_next_error(TranscodeError::failed("decoder exploded"))
            .await;

        let request = TranscodeRequest {
            input_uri: "/cache/a.heic".to_string(),
            format: ImageFormat::Jpeg,
            quality: 0.9,
        };

        assert!(transcoder.transcode(request.clone()).await.is_err());
        assert!(transcoder.transcode(request).await.is_ok());
    }
}
