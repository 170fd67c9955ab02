//! pixelmorph core: the asynchronous workflow behind a one-screen image
//! converter.
//!
//! Everything heavy lives behind collaborator traits — the picker dialog,
//! the pixel transcoder, the filesystem, the media gallery, the permission
//! service and the ad network. This crate owns the coordination between
//! them: the select/convert/persist sequence with staged progress and
//! mutual exclusion, and the independently-lifecycled interstitial state
//! machine whose failures never reach the conversion path.

pub mod ads;
pub mod config;
pub mod gallery;
pub mod metrics;
pub mod permission;
pub mod picker;
pub mod storage;
pub mod testing;
pub mod transcoder;
pub mod workflow;

pub use ads::{AdConfig, AdError, AdEvent, AdState, InterstitialManager, InterstitialUnit};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, GalleryConfig,
    PipelineConfig,
};
pub use gallery::{AssetHandle, GalleryError, GalleryWriter};
pub use permission::{PermissionGate, PermissionProvider, PermissionState};
pub use picker::{ImagePicker, PickedFile, PickerError};
pub use storage::{FileStore, LocalFileStore, StorageError};
pub use transcoder::{
    ImageFormat, TranscodeError, TranscodeOutput, TranscodeRequest, Transcoder,
};
pub use workflow::{
    ConversionPipeline, ConversionStage, ConvertedArtifact, Selection, SourceArtifact,
    WorkflowCoordinator, WorkflowError, WorkflowEvent,
};
