//! Ad state machine and network events.

use serde::{Deserialize, Serialize};

/// State of an interstitial ad unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdState {
    /// No load has been requested yet.
    #[default]
    Unloaded,
    /// A load is in flight.
    Loading,
    /// Content is loaded and can be shown.
    Ready,
    /// The last load failed; a retry is scheduled.
    Failed,
}

/// Asynchronous events reported by the ad network client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdEvent {
    /// A previously requested load completed.
    Loaded,
    /// A previously requested load failed.
    LoadFailed { reason: String },
    /// The user closed a shown interstitial.
    Dismissed,
}

/// Commands accepted by the manager's event loop.
#[derive(Debug)]
pub(crate) enum AdCommand {
    /// Show the unit if it is ready; otherwise kick a load.
    Show,
}
