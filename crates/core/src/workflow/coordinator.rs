//! Workflow coordinator implementation.
//!
//! Sequences file selection -> conversion -> progress -> persistence while
//! the interstitial subsystem runs on its own lifecycle. The two meet in
//! exactly one place: a non-blocking show request when a conversion is
//! accepted. Nothing the ad side does can block, fail or mutate the
//! conversion path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use crate::ads::InterstitialManager;
use crate::config::GalleryConfig;
use crate::gallery::GalleryWriter;
use crate::metrics::{
    CONVERSIONS_TOTAL, CONVERSION_DURATION, GALLERY_SAVES_TOTAL, SELECTIONS_TOTAL,
};
use crate::permission::{PermissionGate, PermissionState};
use crate::picker::ImagePicker;
use crate::transcoder::ImageFormat;

use super::error::WorkflowError;
use super::pipeline::ConversionPipeline;
use super::types::{
    ConversionStage, ConvertedArtifact, Selection, SourceArtifact, WorkflowEvent,
};

const EVENT_BUFFER: usize = 64;

/// Coordinator-owned state: the current selection, the last result and the
/// progress of the active run.
#[derive(Default)]
struct WorkflowState {
    source: Option<SourceArtifact>,
    converted: Option<ConvertedArtifact>,
    stage: ConversionStage,
}

/// The workflow coordinator.
pub struct WorkflowCoordinator {
    picker: Arc<dyn ImagePicker>,
    pipeline: ConversionPipeline,
    gallery: Arc<dyn GalleryWriter>,
    permissions: PermissionGate,
    gallery_config: GalleryConfig,
    interstitial: Option<Arc<InterstitialManager>>,
    state: Arc<RwLock<WorkflowState>>,
    in_flight: AtomicBool,
    events_tx: broadcast::Sender<WorkflowEvent>,
}

impl WorkflowCoordinator {
    /// Creates a new coordinator.
    pub fn new(
        picker: Arc<dyn ImagePicker>,
        pipeline: ConversionPipeline,
        gallery: Arc<dyn GalleryWriter>,
        permissions: PermissionGate,
        gallery_config: GalleryConfig,
    ) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_BUFFER);

        Self {
            picker,
            pipeline,
            gallery,
            permissions,
            gallery_config,
            interstitial: None,
            state: Arc::new(RwLock::new(WorkflowState::default())),
            in_flight: AtomicBool::new(false),
            events_tx,
        }
    }

    /// Attaches the interstitial manager for best-effort show requests.
    pub fn with_interstitial(mut self, interstitial: Arc<InterstitialManager>) -> Self {
        self.interstitial = Some(interstitial);
        self
    }

    /// Subscribes to coordinator notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.events_tx.subscribe()
    }

    /// The currently selected source, if any.
    pub async fn source(&self) -> Option<SourceArtifact> {
        self.state.read().await.source.clone()
    }

    /// The last conversion result, if any.
    pub async fn converted(&self) -> Option<ConvertedArtifact> {
        self.state.read().await.converted.clone()
    }

    /// The stage of the active run (Idle when none).
    pub async fn stage(&self) -> ConversionStage {
        self.state.read().await.stage
    }

    /// Progress percentage of the active run.
    pub async fn progress(&self) -> u8 {
        self.stage().await.percent()
    }

    /// Opens the picker and replaces the selection on success.
    ///
    /// Cancellation leaves all state untouched. A successful pick replaces
    /// the source, clears any previous result and resets progress, so a
    /// stale artifact can never be displayed against a new source.
    pub async fn select_source(&self) -> Result<Selection, WorkflowError> {
        let picked = match self.picker.pick_image().await {
            Ok(picked) => picked,
            Err(e) => {
                warn!("image selection failed: {}", e);
                SELECTIONS_TOTAL.with_label_values(&["error"]).inc();
                return Err(WorkflowError::SelectionFailed(e.to_string()));
            }
        };

        let Some(file) = picked else {
            debug!("image selection cancelled");
            SELECTIONS_TOTAL.with_label_values(&["cancelled"]).inc();
            return Ok(Selection::Cancelled);
        };

        let source = SourceArtifact::from_picked(file);
        {
            let mut state = self.state.write().await;
            state.source = Some(source.clone());
            state.converted = None;
            state.stage = ConversionStage::Idle;
        }

        info!(
            "selected source {} ({}, {})",
            source.display_name,
            source.media_kind,
            source.size_display()
        );
        SELECTIONS_TOTAL.with_label_values(&["picked"]).inc();
        self.emit(WorkflowEvent::SourceSelected {
            display_name: source.display_name.clone(),
        });

        Ok(Selection::Picked(source))
    }

    /// Runs a conversion of the current source to the requested format.
    ///
    /// Guards, in order: a source must be selected, it must be an image,
    /// and no other run may be in flight (a concurrent request is rejected,
    /// not queued). An accepted run walks the stage machine and publishes
    /// its artifact only after the output reaches permanent storage; any
    /// failure discards progress and publishes nothing.
    pub async fn request_conversion(
        &self,
        format_token: &str,
    ) -> Result<ConvertedArtifact, WorkflowError> {
        let source = self
            .state
            .read()
            .await
            .source
            .clone()
            .ok_or(WorkflowError::NoSourceSelected)?;

        if !source.is_image() {
            return Err(WorkflowError::UnsupportedMediaKind(source.media_kind));
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            CONVERSIONS_TOTAL.with_label_values(&["rejected"]).inc();
            return Err(WorkflowError::AlreadyInFlight);
        }

        // Best-effort monetization; a try_send onto the ad loop's queue
        // cannot block or fail the conversion.
        if let Some(interstitial) = &self.interstitial {
            interstitial.show_if_ready();
        }

        let started = Instant::now();
        let result = self.run_conversion(&source, format_token).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(artifact) => {
                info!(
                    "converted {} to {} as {}",
                    artifact.source_display_name, artifact.target_format, artifact.display_name
                );
                CONVERSIONS_TOTAL.with_label_values(&["ok"]).inc();
                CONVERSION_DURATION
                    .with_label_values(&[artifact.target_format.extension()])
                    .observe(started.elapsed().as_secs_f64());
                self.emit(WorkflowEvent::ConversionCompleted {
                    artifact: artifact.clone(),
                });
                Ok(artifact)
            }
            Err(err) => {
                let failed_stage = {
                    let mut state = self.state.write().await;
                    let at = state.stage;
                    state.stage = ConversionStage::Idle;
                    at
                };
                warn!("conversion failed at {:?}: {}", failed_stage, err);
                CONVERSIONS_TOTAL.with_label_values(&["error"]).inc();
                self.emit(WorkflowEvent::ConversionFailed {
                    stage: failed_stage,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Saves the last conversion result to the system gallery.
    ///
    /// Requires gallery-write permission, prompting the user if the state
    /// is undetermined. A denial leaves the converted artifact in place.
    pub async fn persist_result(&self) -> Result<(), WorkflowError> {
        let artifact = self
            .state
            .read()
            .await
            .converted
            .clone()
            .ok_or(WorkflowError::NothingToSave)?;

        if self.permissions.ensure_granted().await != PermissionState::Granted {
            warn!("gallery save refused: permission denied");
            GALLERY_SAVES_TOTAL.with_label_values(&["denied"]).inc();
            return Err(WorkflowError::PermissionDenied);
        }

        let asset = match self.gallery.create_asset(&artifact.locator).await {
            Ok(asset) => asset,
            Err(e) => {
                warn!("gallery asset creation failed: {}", e);
                GALLERY_SAVES_TOTAL.with_label_values(&["error"]).inc();
                return Err(WorkflowError::PersistenceFailure(e.to_string()));
            }
        };

        let album = self.gallery_config.album_name.as_str();
        if let Err(e) = self.gallery.add_to_album(album, &asset, false).await {
            warn!("album write failed: {}", e);
            GALLERY_SAVES_TOTAL.with_label_values(&["error"]).inc();
            return Err(WorkflowError::PersistenceFailure(e.to_string()));
        }

        info!("saved {} to album {}", artifact.display_name, album);
        GALLERY_SAVES_TOTAL.with_label_values(&["ok"]).inc();
        self.emit(WorkflowEvent::ResultPersisted {
            album: album.to_string(),
            display_name: artifact.display_name,
        });

        Ok(())
    }

    /// Walks an accepted run through the stage machine.
    async fn run_conversion(
        &self,
        source: &SourceArtifact,
        format_token: &str,
    ) -> Result<ConvertedArtifact, WorkflowError> {
        self.advance(ConversionStage::Accepted).await;

        // Map the token before any external call so an unsupported format
        // fails fast.
        let format = ImageFormat::parse(format_token)
            .ok_or_else(|| WorkflowError::UnsupportedFormat(format_token.to_string()))?;

        self.advance(ConversionStage::Dispatched).await;
        let output = self
            .pipeline
            .transcode(source, format)
            .await
            .map_err(|e| WorkflowError::TranscodeFailure(e.to_string()))?;

        self.advance(ConversionStage::Transcoded).await;
        let file_name = self.pipeline.output_name(format);
        let locator = self
            .pipeline
            .persist(&output.uri, &file_name)
            .await
            .map_err(|e| WorkflowError::PersistenceFailure(e.to_string()))?;

        self.advance(ConversionStage::Persisted).await;

        let artifact = ConvertedArtifact {
            locator,
            display_name: file_name,
            target_format: format,
            source_display_name: source.display_name.clone(),
        };
        self.state.write().await.converted = Some(artifact.clone());

        Ok(artifact)
    }

    async fn advance(&self, stage: ConversionStage) {
        self.state.write().await.stage = stage;
        self.emit(WorkflowEvent::ProgressChanged {
            stage,
            percent: stage.percent(),
        });
    }

    fn emit(&self, event: WorkflowEvent) {
        // No receivers is fine; observers are optional.
        let _ = self.events_tx.send(event);
    }
}
