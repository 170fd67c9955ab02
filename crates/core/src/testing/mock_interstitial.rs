//! Mock interstitial ad unit for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, RwLock};

use crate::ads::{AdError, AdEvent, InterstitialUnit};

const EVENT_BUFFER: usize = 16;

/// Mock implementation of the InterstitialUnit trait.
///
/// Owns the event channel the manager consumes. Tests either emit events
/// manually with [`emit`](Self::emit) or configure
/// [`set_load_outcome`](Self::set_load_outcome) to auto-complete every
/// load request, which keeps background retry loads resolvable.
#[derive(Debug)]
pub struct MockInterstitial {
    events_tx: mpsc::Sender<AdEvent>,
    events_rx: Mutex<Option<mpsc::Receiver<AdEvent>>>,
    load_count: Arc<RwLock<usize>>,
    show_count: Arc<RwLock<usize>>,
    next_load_error: Arc<RwLock<Option<AdError>>>,
    next_show_error: Arc<RwLock<Option<AdError>>>,
    load_outcome: Arc<RwLock<Option<AdEvent>>>,
}

impl Default for MockInterstitial {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInterstitial {
    /// Create a new mock unit.
    pub fn new() -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
        Self {
            events_tx,
            events_rx: Mutex::new(Some(events_rx)),
            load_count: Arc::new(RwLock::new(0)),
            show_count: Arc::new(RwLock::new(0)),
            next_load_error: Arc::new(RwLock::new(None)),
            next_show_error: Arc::new(RwLock::new(None)),
            load_outcome: Arc::new(RwLock::new(None)),
        }
    }

    /// Take the event receiver to hand to the manager. Panics if taken
    /// twice.
    pub async fn take_events(&self) -> mpsc::Receiver<AdEvent> {
        self.events_rx
            .lock()
            .await
            .take()
            .expect("event channel already taken")
    }

    /// Emit an ad network event to the manager. Best-effort, like the real
    /// SDK: events after shutdown are dropped.
    pub async fn emit(&self, event: AdEvent) {
        let _ = self.events_tx.send(event).await;
    }

    /// Auto-complete every load request with the given event.
    pub async fn set_load_outcome(&self, outcome: Option<AdEvent>) {
        *self.load_outcome.write().await = outcome;
    }

    /// Configure the next load call itself to fail.
    pub async fn set_next_load_error(&self, error: AdError) {
        *self.next_load_error.write().await = Some(error);
    }

    /// Configure the next show call to fail.
    pub async fn set_next_show_error(&self, error: AdError) {
        *self.next_show_error.write().await = Some(error);
    }

    /// Number of load requests issued.
    pub async fn load_count(&self) -> usize {
        *self.load_count.read().await
    }

    /// Number of show requests issued.
    pub async fn show_count(&self) -> usize {
        *self.show_count.read().await
    }
}

#[async_trait]
impl InterstitialUnit for MockInterstitial {
    fn name(&self) -> &str {
        "mock"
    }

    async fn load(&self) -> Result<(), AdError> {
        *self.load_count.write().await += 1;

        if let Some(err) = self.next_load_error.write().await.take() {
            return Err(err);
        }

        if let Some(outcome) = self.load_outcome.read().await.clone() {
            let _ = self.events_tx.send(outcome).await;
        }
        Ok(())
    }

    async fn show(&self) -> Result<(), AdError> {
        *self.show_count.write().await += 1;

        if let Some(err) = self.next_show_error.write().await.take() {
            return Err(err);
        }
        Ok(())
    }
}
