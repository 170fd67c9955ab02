//! Ad lifecycle integration tests.
//!
//! These tests verify the interstitial state machine through the manager:
//! UNLOADED -> LOADING -> READY | FAILED, show-on-ready with reload on
//! dismissal, and the single-retry backoff after a failed load.

use std::sync::Arc;
use std::time::Duration;

use pixelmorph_core::{
    testing::MockInterstitial, AdConfig, AdError, AdEvent, AdState, InterstitialManager,
};

const RETRY_DELAY_MS: u64 = 50;

/// Test helper owning the mock unit and a started manager.
struct AdHarness {
    unit: Arc<MockInterstitial>,
    manager: Arc<InterstitialManager>,
}

impl AdHarness {
    async fn new(preload: bool) -> Self {
        let unit = Arc::new(MockInterstitial::new());
        let events = unit.take_events().await;
        let config = AdConfig {
            interstitial_unit_id: "test-unit".to_string(),
            banner_unit_id: String::new(),
            retry_delay_ms: RETRY_DELAY_MS,
            preload_on_start: preload,
        };
        let manager = Arc::new(InterstitialManager::new(unit.clone(), events, config));
        manager.start().await;

        Self { unit, manager }
    }

    async fn wait_for_state(&self, expected: AdState, timeout: Duration) -> bool {
        let start = std::time::Instant::now();
        while start.elapsed() < timeout {
            if self.manager.state().await == expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    async fn wait_for_loads(&self, expected: usize, timeout: Duration) -> bool {
        let start = std::time::Instant::now();
        while start.elapsed() < timeout {
            if self.unit.load_count().await >= expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    async fn wait_for_shows(&self, expected: usize, timeout: Duration) -> bool {
        let start = std::time::Instant::now();
        while start.elapsed() < timeout {
            if self.unit.show_count().await >= expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }
}

#[tokio::test]
async fn test_preload_reaches_ready() {
    let harness = AdHarness::new(true).await;
    harness.unit.set_load_outcome(Some(AdEvent::Loaded)).await;

    // A race is possible between start() and set_load_outcome; complete the
    // first load manually if it was issued before the outcome was set.
    harness.unit.emit(AdEvent::Loaded).await;

    assert!(
        harness
            .wait_for_state(AdState::Ready, Duration::from_millis(500))
            .await
    );
    assert_eq!(harness.unit.load_count().await, 1);
    assert_eq!(harness.unit.show_count().await, 0);

    harness.manager.stop().await;
}

#[tokio::test]
async fn test_show_consumes_and_reloads() {
    let harness = AdHarness::new(false).await;
    harness.unit.set_load_outcome(Some(AdEvent::Loaded)).await;

    // Kick the first load through show_if_ready.
    harness.manager.show_if_ready();
    assert!(
        harness
            .wait_for_state(AdState::Ready, Duration::from_millis(500))
            .await
    );

    // Ready now: this one actually shows.
    harness.manager.show_if_ready();
    assert!(harness.wait_for_shows(1, Duration::from_millis(500)).await);

    // The user closes the ad; the manager reloads so the next show is
    // instant.
    harness.unit.emit(AdEvent::Dismissed).await;
    assert!(harness.wait_for_loads(2, Duration::from_millis(500)).await);
    assert!(
        harness
            .wait_for_state(AdState::Ready, Duration::from_millis(500))
            .await
    );

    harness.manager.stop().await;
}

#[tokio::test]
async fn test_show_while_unloaded_starts_load_and_schedules_one_retry() {
    let harness = AdHarness::new(false).await;

    assert_eq!(harness.manager.state().await, AdState::Unloaded);

    // Not ready: no show, but a load is kicked. Never throws.
    harness.manager.show_if_ready();
    assert!(
        harness
            .wait_for_state(AdState::Loading, Duration::from_millis(500))
            .await
    );
    assert_eq!(harness.unit.load_count().await, 1);
    assert_eq!(harness.unit.show_count().await, 0);

    // The network reports failure: FAILED, with exactly one retry
    // scheduled.
    harness
        .unit
        .emit(AdEvent::LoadFailed {
            reason: "no fill".to_string(),
        })
        .await;
    assert!(
        harness
            .wait_for_state(AdState::Failed, Duration::from_millis(500))
            .await
    );

    assert!(harness.wait_for_loads(2, Duration::from_millis(500)).await);

    // The retry load got no outcome, so the unit sits in LOADING and no
    // further retries fire.
    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS * 4)).await;
    assert_eq!(harness.unit.load_count().await, 2);
    assert_eq!(harness.manager.state().await, AdState::Loading);

    harness.manager.stop().await;
}

#[tokio::test]
async fn test_show_while_loading_is_noop() {
    let harness = AdHarness::new(false).await;

    harness.manager.show_if_ready();
    assert!(
        harness
            .wait_for_state(AdState::Loading, Duration::from_millis(500))
            .await
    );

    // Overlapping requests while a load is in flight do nothing.
    harness.manager.show_if_ready();
    harness.manager.show_if_ready();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(harness.unit.load_count().await, 1);
    assert_eq!(harness.unit.show_count().await, 0);

    harness.manager.stop().await;
}

#[tokio::test]
async fn test_failed_show_is_absorbed_and_retried() {
    let harness = AdHarness::new(false).await;
    harness.unit.set_load_outcome(Some(AdEvent::Loaded)).await;

    harness.manager.show_if_ready();
    assert!(
        harness
            .wait_for_state(AdState::Ready, Duration::from_millis(500))
            .await
    );

    // The SDK rejects the show; nothing escapes, the unit goes FAILED and
    // a fresh load is scheduled.
    harness
        .unit
        .set_next_show_error(AdError::show_failed("not attached"))
        .await;
    harness.manager.show_if_ready();
    assert!(
        harness
            .wait_for_state(AdState::Failed, Duration::from_millis(500))
            .await
    );

    // Backoff expires, the reload auto-completes, and we are READY again.
    assert!(
        harness
            .wait_for_state(AdState::Ready, Duration::from_millis(500))
            .await
    );
    assert_eq!(harness.unit.load_count().await, 2);

    harness.manager.stop().await;
}

#[tokio::test]
async fn test_stop_halts_the_loop() {
    let harness = AdHarness::new(false).await;
    harness.manager.stop().await;

    harness.manager.show_if_ready();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(harness.unit.load_count().await, 0);
    assert_eq!(harness.manager.state().await, AdState::Unloaded);
}
