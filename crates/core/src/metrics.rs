//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Workflow (selections, conversions, gallery saves)
//! - Ad lifecycle (loads, shows)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Workflow metrics
// =============================================================================

/// Selection attempts total by result.
pub static SELECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pixelmorph_selections_total", "Total selection attempts"),
        &["result"], // "picked", "cancelled", "error"
    )
    .unwrap()
});

/// Conversion runs total by result.
pub static CONVERSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pixelmorph_conversions_total", "Total conversion runs"),
        &["result"], // "ok", "error", "rejected"
    )
    .unwrap()
});

/// Conversion duration in seconds by target format.
pub static CONVERSION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "pixelmorph_conversion_duration_seconds",
            "Duration of conversion runs",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["format"],
    )
    .unwrap()
});

/// Gallery save attempts total by result.
pub static GALLERY_SAVES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pixelmorph_gallery_saves_total", "Total gallery saves"),
        &["result"], // "ok", "denied", "error"
    )
    .unwrap()
});

// =============================================================================
// Ad lifecycle metrics
// =============================================================================

/// Interstitial load outcomes by result.
pub static AD_LOADS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pixelmorph_ad_loads_total", "Total interstitial loads"),
        &["result"], // "ok", "error"
    )
    .unwrap()
});

/// Interstitials shown.
pub static AD_SHOWS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("pixelmorph_ad_shows_total", "Total interstitials shown").unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Workflow
        Box::new(SELECTIONS_TOTAL.clone()),
        Box::new(CONVERSIONS_TOTAL.clone()),
        Box::new(CONVERSION_DURATION.clone()),
        Box::new(GALLERY_SAVES_TOTAL.clone()),
        // Ads
        Box::new(AD_LOADS_TOTAL.clone()),
        Box::new(AD_SHOWS_TOTAL.clone()),
    ]
}
