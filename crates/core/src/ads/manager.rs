//! Interstitial manager implementation.
//!
//! One background task owns the state machine. It is the single writer of
//! [`AdState`]; callers interact through non-blocking commands and a
//! read-only state accessor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::metrics::{AD_LOADS_TOTAL, AD_SHOWS_TOTAL};

use super::config::AdConfig;
use super::events::{AdCommand, AdEvent, AdState};
use super::traits::InterstitialUnit;

const COMMAND_BUFFER: usize = 16;

/// Owns a single interstitial unit for the process lifetime and drives it
/// through preload, show, reload-on-dismissal and failure-backoff cycles.
pub struct InterstitialManager {
    unit: Arc<dyn InterstitialUnit>,
    config: AdConfig,
    state: Arc<RwLock<AdState>>,
    cmd_tx: mpsc::Sender<AdCommand>,
    cmd_rx: Mutex<Option<mpsc::Receiver<AdCommand>>>,
    events_rx: Mutex<Option<mpsc::Receiver<AdEvent>>>,
    running: Arc<AtomicBool>,
    shutdown_tx: broadcast::Sender<()>,
}

impl InterstitialManager {
    /// Creates a new manager over an ad unit and its event channel.
    pub fn new(
        unit: Arc<dyn InterstitialUnit>,
        events: mpsc::Receiver<AdEvent>,
        config: AdConfig,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            unit,
            config,
            state: Arc::new(RwLock::new(AdState::Unloaded)),
            cmd_tx,
            cmd_rx: Mutex::new(Some(cmd_rx)),
            events_rx: Mutex::new(Some(events)),
            running: Arc::new(AtomicBool::new(false)),
            shutdown_tx,
        }
    }

    /// Starts the background event loop (and the initial preload when
    /// configured).
    pub async fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("interstitial manager already running");
            return;
        }

        let Some(cmd_rx) = self.cmd_rx.lock().await.take() else {
            warn!("interstitial manager already consumed its command channel");
            return;
        };
        let Some(events_rx) = self.events_rx.lock().await.take() else {
            warn!("interstitial manager already consumed its event channel");
            return;
        };

        info!("starting interstitial manager for unit {}", self.unit.name());

        let unit = Arc::clone(&self.unit);
        let state = Arc::clone(&self.state);
        let running = Arc::clone(&self.running);
        let retry_delay = self.config.retry_delay();
        let preload = self.config.preload_on_start;
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            let mut cmd_rx = cmd_rx;
            let mut events_rx = events_rx;

            // Loop-local flags: this task is the only writer, so plain
            // booleans are enough to suppress overlapping load/show calls.
            let mut loading = false;
            let mut presenting = false;
            let mut retry_at: Option<Instant> = None;

            if preload {
                Self::begin_load(&unit, &state, &mut loading, &mut retry_at, retry_delay).await;
            }

            loop {
                let deadline = retry_at;
                let retry = async move {
                    match deadline {
                        Some(at) => tokio::time::sleep_until(at).await,
                        None => std::future::pending::<()>().await,
                    }
                };

                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        debug!("interstitial loop received shutdown signal");
                        break;
                    }
                    _ = retry => {
                        retry_at = None;
                        Self::begin_load(&unit, &state, &mut loading, &mut retry_at, retry_delay)
                            .await;
                    }
                    Some(cmd) = cmd_rx.recv() => {
                        if !running.load(Ordering::Relaxed) {
                            break;
                        }
                        match cmd {
                            AdCommand::Show => {
                                Self::handle_show(
                                    &unit,
                                    &state,
                                    &mut loading,
                                    &mut presenting,
                                    &mut retry_at,
                                    retry_delay,
                                )
                                .await;
                            }
                        }
                    }
                    Some(event) = events_rx.recv() => {
                        if !running.load(Ordering::Relaxed) {
                            break;
                        }
                        Self::handle_event(
                            event,
                            &unit,
                            &state,
                            &mut loading,
                            &mut presenting,
                            &mut retry_at,
                            retry_delay,
                        )
                        .await;
                    }
                }
            }
            debug!("interstitial loop stopped");
        });
    }

    /// Stops the event loop.
    pub async fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            warn!("interstitial manager not running");
            return;
        }
        let _ = self.shutdown_tx.send(());
    }

    /// Current state of the unit.
    pub async fn state(&self) -> AdState {
        *self.state.read().await
    }

    /// Requests a show if content is ready; kicks a load otherwise.
    ///
    /// Never blocks and never fails: the request is queued for the event
    /// loop, and a full queue simply drops it. Ad problems stay inside the
    /// ad subsystem.
    pub fn show_if_ready(&self) {
        if let Err(e) = self.cmd_tx.try_send(AdCommand::Show) {
            debug!("interstitial show request dropped: {}", e);
        }
    }

    async fn begin_load(
        unit: &Arc<dyn InterstitialUnit>,
        state: &Arc<RwLock<AdState>>,
        loading: &mut bool,
        retry_at: &mut Option<Instant>,
        retry_delay: std::time::Duration,
    ) {
        if *loading {
            return;
        }
        *loading = true;
        *state.write().await = AdState::Loading;

        if let Err(e) = unit.load().await {
            warn!("interstitial load request failed: {}", e);
            AD_LOADS_TOTAL.with_label_values(&["error"]).inc();
            *loading = false;
            *state.write().await = AdState::Failed;
            *retry_at = Some(Instant::now() + retry_delay);
        }
    }

    async fn handle_show(
        unit: &Arc<dyn InterstitialUnit>,
        state: &Arc<RwLock<AdState>>,
        loading: &mut bool,
        presenting: &mut bool,
        retry_at: &mut Option<Instant>,
        retry_delay: std::time::Duration,
    ) {
        let current = *state.read().await;
        match current {
            AdState::Ready => {
                if *presenting {
                    return;
                }
                *presenting = true;
                match unit.show().await {
                    Ok(()) => {
                        AD_SHOWS_TOTAL.inc();
                        debug!("interstitial shown");
                    }
                    Err(e) => {
                        warn!("interstitial show failed: {}", e);
                        *presenting = false;
                        *state.write().await = AdState::Failed;
                        *retry_at = Some(Instant::now() + retry_delay);
                    }
                }
            }
            AdState::Unloaded | AdState::Failed => {
                *retry_at = None;
                Self::begin_load(unit, state, loading, retry_at, retry_delay).await;
            }
            AdState::Loading => {}
        }
    }

    async fn handle_event(
        event: AdEvent,
        unit: &Arc<dyn InterstitialUnit>,
        state: &Arc<RwLock<AdState>>,
        loading: &mut bool,
        presenting: &mut bool,
        retry_at: &mut Option<Instant>,
        retry_delay: std::time::Duration,
    ) {
        match event {
            AdEvent::Loaded => {
                *loading = false;
                *state.write().await = AdState::Ready;
                AD_LOADS_TOTAL.with_label_values(&["ok"]).inc();
                debug!("interstitial loaded");
            }
            AdEvent::LoadFailed { reason } => {
                warn!("interstitial load failed: {}", reason);
                AD_LOADS_TOTAL.with_label_values(&["error"]).inc();
                *loading = false;
                *state.write().await = AdState::Failed;
                *retry_at = Some(Instant::now() + retry_delay);
            }
            AdEvent::Dismissed => {
                // Consumed: reload immediately so the next show is instant.
                *presenting = false;
                Self::begin_load(unit, state, loading, retry_at, retry_delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockInterstitial;

    fn test_config(retry_delay_ms: u64, preload: bool) -> AdConfig {
        AdConfig {
            interstitial_unit_id: "test-unit".to_string(),
            banner_unit_id: String::new(),
            retry_delay_ms,
            preload_on_start: preload,
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_unloaded() {
        let unit = Arc::new(MockInterstitial::new());
        let events = unit.take_events().await;
        let manager = InterstitialManager::new(unit, events, test_config(50, false));

        assert_eq!(manager.state().await, AdState::Unloaded);
    }

    #[tokio::test]
    async fn test_start_twice_is_harmless() {
        let unit = Arc::new(MockInterstitial::new());
        let events = unit.take_events().await;
        let manager = InterstitialManager::new(unit.clone(), events, test_config(50, false));

        manager.start().await;
        manager.start().await;
        manager.stop().await;

        assert_eq!(unit.load_count().await, 0);
    }

    #[tokio::test]
    async fn test_show_if_ready_before_start_does_not_panic() {
        let unit = Arc::new(MockInterstitial::new());
        let events = unit.take_events().await;
        let manager = InterstitialManager::new(unit, events, test_config(50, false));

        // Queued; nothing processes it yet.
        manager.show_if_ready();
        assert_eq!(manager.state().await, AdState::Unloaded);
    }
}
