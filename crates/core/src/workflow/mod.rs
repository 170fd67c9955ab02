//! Workflow coordinator for the select -> convert -> persist sequence.
//!
//! The coordinator owns the user-visible state (current selection,
//! conversion progress, last result) as plain data plus a broadcast event
//! channel for observers, and enforces the one invariant everything else
//! hangs on: at most one conversion in flight at a time.

mod coordinator;
mod error;
mod pipeline;
mod types;

pub use coordinator::WorkflowCoordinator;
pub use error::WorkflowError;
pub use pipeline::ConversionPipeline;
pub use types::{
    ConversionStage, ConvertedArtifact, Selection, SourceArtifact, WorkflowEvent,
};
