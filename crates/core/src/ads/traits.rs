//! Trait definitions for the ads module.

use async_trait::async_trait;

use super::error::AdError;

/// An interstitial ad unit from the ad network SDK.
///
/// `load` and `show` only issue the request; completion is reported
/// asynchronously as [`AdEvent`](super::AdEvent)s on the channel handed to
/// the [`InterstitialManager`](super::InterstitialManager). The manager
/// guarantees the two are never in flight concurrently on one unit.
#[async_trait]
pub trait InterstitialUnit: Send + Sync {
    /// Returns the name of this ad network implementation.
    fn name(&self) -> &str;

    /// Requests interstitial content.
    async fn load(&self) -> Result<(), AdError>;

    /// Presents loaded content full-screen.
    async fn show(&self) -> Result<(), AdError>;
}
