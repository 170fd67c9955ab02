//! Transcoder collaborator for re-encoding images.
//!
//! The actual pixel work is owned by an external image-processing service;
//! this module only defines the contract the workflow consumes: a target
//! format token, a fixed compression quality, and an output locator.

mod error;
mod traits;
mod types;

pub use error::TranscodeError;
pub use traits::Transcoder;
pub use types::{ImageFormat, TranscodeOutput, TranscodeRequest};
