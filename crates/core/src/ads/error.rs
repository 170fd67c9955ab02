//! Error types for the ads module.
//!
//! These never cross into the workflow error taxonomy: every ad failure is
//! logged and absorbed by the manager.

use thiserror::Error;

/// Errors reported by the ad network client.
#[derive(Debug, Error)]
pub enum AdError {
    /// The load request could not be issued.
    #[error("ad load failed: {reason}")]
    LoadFailed { reason: String },

    /// The show request failed.
    #[error("ad show failed: {reason}")]
    ShowFailed { reason: String },
}

impl AdError {
    /// Creates a new load error.
    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            reason: reason.into(),
        }
    }

    /// Creates a new show error.
    pub fn show_failed(reason: impl Into<String>) -> Self {
        Self::ShowFailed {
            reason: reason.into(),
        }
    }
}
