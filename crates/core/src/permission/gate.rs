//! Permission gate implementation.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::PermissionProvider;
use super::types::PermissionState;

/// Caches the process-wide gallery-write permission state.
pub struct PermissionGate {
    provider: Arc<dyn PermissionProvider>,
    cached: RwLock<PermissionState>,
}

impl PermissionGate {
    /// Creates a new gate over the platform permission service.
    pub fn new(provider: Arc<dyn PermissionProvider>) -> Self {
        Self {
            provider,
            cached: RwLock::new(PermissionState::Unknown),
        }
    }

    /// Returns the cached state without touching the platform.
    pub async fn current(&self) -> PermissionState {
        *self.cached.read().await
    }

    /// Resolves the permission state, prompting the user if undetermined.
    ///
    /// A cached grant short-circuits. Otherwise the platform status is
    /// refreshed, and if that still does not resolve to a grant, the user
    /// is prompted once. The outcome is cached; a denial is re-requested on
    /// the next call rather than cached forever, since users can grant
    /// access from system settings at any time.
    pub async fn ensure_granted(&self) -> PermissionState {
        if *self.cached.read().await == PermissionState::Granted {
            return PermissionState::Granted;
        }

        let status = self.provider.status().await;
        if status == PermissionState::Granted {
            *self.cached.write().await = PermissionState::Granted;
            return PermissionState::Granted;
        }

        let outcome = self.provider.request().await;
        *self.cached.write().await = outcome;
        outcome
    }

    /// Startup warm-up: request permission eagerly and ignore the outcome.
    ///
    /// Mirrors asking on launch so the persistence path usually finds a
    /// cached grant.
    pub async fn prime(&self) {
        let state = self.ensure_granted().await;
        if state != PermissionState::Granted {
            debug!("gallery permission not granted at startup: {:?}", state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPermissions;

    #[tokio::test]
    async fn test_cached_grant_short_circuits() {
        let provider = Arc::new(MockPermissions::granted());
        let gate = PermissionGate::new(provider.clone());

        assert_eq!(gate.ensure_granted().await, PermissionState::Granted);
        assert_eq!(gate.ensure_granted().await, PermissionState::Granted);

        // Only the first call hits the platform.
        assert_eq!(provider.status_count().await, 1);
        assert_eq!(provider.request_count().await, 0);
    }

    #[tokio::test]
    async fn test_undetermined_prompts_once_per_call() {
        let provider = Arc::new(MockPermissions::new(
            PermissionState::Unknown,
            PermissionState::Denied,
        ));
        let gate = PermissionGate::new(provider.clone());

        assert_eq!(gate.ensure_granted().await, PermissionState::Denied);
        assert_eq!(provider.request_count().await, 1);

        // Denial is not cached forever: the next check prompts again.
        assert_eq!(gate.ensure_granted().await, PermissionState::Denied);
        assert_eq!(provider.request_count().await, 2);
    }

    #[tokio::test]
    async fn test_prompt_grant_is_cached() {
        let provider = Arc::new(MockPermissions::new(
            PermissionState::Unknown,
            PermissionState::Granted,
        ));
        let gate = PermissionGate::new(provider.clone());

        assert_eq!(gate.ensure_granted().await, PermissionState::Granted);
        assert_eq!(gate.ensure_granted().await, PermissionState::Granted);
        assert_eq!(provider.request_count().await, 1);
    }

    #[tokio::test]
    async fn test_prime_ignores_denial() {
        let provider = Arc::new(MockPermissions::new(
            PermissionState::Unknown,
            PermissionState::Denied,
        ));
        let gate = PermissionGate::new(provider);

        gate.prime().await;
        assert_eq!(gate.current().await, PermissionState::Denied);
    }
}
