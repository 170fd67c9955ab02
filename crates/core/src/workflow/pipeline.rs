//! Conversion pipeline: the thin adapter between the coordinator and the
//! external transcode and storage services.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::config::PipelineConfig;
use crate::storage::{FileStore, StorageError};
use crate::transcoder::{
    ImageFormat, TranscodeError, TranscodeOutput, TranscodeRequest, Transcoder,
};

use super::types::SourceArtifact;

/// Drives a single conversion's external calls: transcode with a fixed
/// quality, then move the output into permanent storage under a generated,
/// collision-resistant name.
pub struct ConversionPipeline {
    transcoder: Arc<dyn Transcoder>,
    store: Arc<dyn FileStore>,
    config: PipelineConfig,
    // High-water mark for generated name stamps. Wall-clock millis alone
    // can collide when two runs finish inside the same millisecond.
    last_stamp: AtomicI64,
}

impl ConversionPipeline {
    /// Creates a new pipeline over the transcode and storage services.
    pub fn new(
        transcoder: Arc<dyn Transcoder>,
        store: Arc<dyn FileStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            transcoder,
            store,
            config,
            last_stamp: AtomicI64::new(0),
        }
    }

    /// Generates the output file name for a run: `converted_<millis>.<ext>`.
    ///
    /// Unique within this process; collisions across process restarts in
    /// the same millisecond are accepted, storage being per user device.
    pub fn output_name(&self, format: ImageFormat) -> String {
        format!(
            "{}_{}.{}",
            self.config.output_prefix,
            self.next_stamp(),
            format.extension()
        )
    }

    /// Issues the external transcode call for the source.
    pub async fn transcode(
        &self,
        source: &SourceArtifact,
        format: ImageFormat,
    ) -> Result<TranscodeOutput, TranscodeError> {
        let request = TranscodeRequest {
            input_uri: source.locator.clone(),
            format,
            quality: self.config.quality,
        };
        self.transcoder.transcode(request).await
    }

    /// Moves transcoded output into permanent storage.
    ///
    /// Returns the locator of the stored file.
    pub async fn persist(&self, from_uri: &str, file_name: &str) -> Result<String, StorageError> {
        let root = self.store.permanent_root();
        let destination = format!("{}/{}", root.trim_end_matches('/'), file_name);
        self.store.move_file(from_uri, &destination).await?;
        Ok(destination)
    }

    fn next_stamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut stamp = now;
        let _ = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                stamp = now.max(prev + 1);
                Some(stamp)
            });
        stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFileStore, MockTranscoder};

    fn pipeline() -> ConversionPipeline {
        ConversionPipeline::new(
            Arc::new(MockTranscoder::new()),
            Arc::new(MockFileStore::new("/store")),
            PipelineConfig::default(),
        )
    }

    fn source() -> SourceArtifact {
        SourceArtifact {
            locator: "/cache/picked-0".to_string(),
            display_name: "photo.heic".to_string(),
            media_kind: "image/heic".to_string(),
            size_bytes: 1024,
            extension: "heic".to_string(),
        }
    }

    #[test]
    fn test_output_name_shape() {
        let name = pipeline().output_name(ImageFormat::Png);
        let stamp = name
            .strip_prefix("converted_")
            .and_then(|rest| rest.strip_suffix(".png"))
            .expect("name should be converted_<millis>.png");
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_output_names_never_collide_in_process() {
        let pipeline = pipeline();
        let a = pipeline.output_name(ImageFormat::Jpeg);
        let b = pipeline.output_name(ImageFormat::Jpeg);
        let c = pipeline.output_name(ImageFormat::Jpeg);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[tokio::test]
    async fn test_transcode_carries_configured_quality() {
        let transcoder = Arc::new(MockTranscoder::new());
        let pipeline = ConversionPipeline::new(
            transcoder.clone(),
            Arc::new(MockFileStore::new("/store")),
            PipelineConfig {
                quality: 0.85,
                ..Default::default()
            },
        );

        pipeline.transcode(&source(), ImageFormat::Webp).await.unwrap();

        let recorded = transcoder.recorded_requests().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].quality, 0.85);
        assert_eq!(recorded[0].format, ImageFormat::Webp);
        assert_eq!(recorded[0].input_uri, "/cache/picked-0");
    }

    #[tokio::test]
    async fn test_persist_joins_root_without_double_separator() {
        let store = Arc::new(MockFileStore::new("/store/"));
        let pipeline = ConversionPipeline::new(
            Arc::new(MockTranscoder::new()),
            store.clone(),
            PipelineConfig::default(),
        );

        let locator = pipeline.persist("/scratch/out.png", "converted_1.png").await.unwrap();
        assert_eq!(locator, "/store/converted_1.png");

        let moves = store.recorded_moves().await;
        assert_eq!(moves, vec![("/scratch/out.png".to_string(), "/store/converted_1.png".to_string())]);
    }
}
