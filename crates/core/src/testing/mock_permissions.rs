//! Mock permission provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::permission::{PermissionProvider, PermissionState};

/// Mock implementation of the PermissionProvider trait.
#[derive(Debug, Clone)]
pub struct MockPermissions {
    status: Arc<RwLock<PermissionState>>,
    request_result: Arc<RwLock<PermissionState>>,
    status_count: Arc<RwLock<usize>>,
    request_count: Arc<RwLock<usize>>,
}

impl MockPermissions {
    /// Create a mock with explicit status and prompt outcomes.
    pub fn new(status: PermissionState, request_result: PermissionState) -> Self {
        Self {
            status: Arc::new(RwLock::new(status)),
            request_result: Arc::new(RwLock::new(request_result)),
            status_count: Arc::new(RwLock::new(0)),
            request_count: Arc::new(RwLock::new(0)),
        }
    }

    /// Permission already granted.
    pub fn granted() -> Self {
        Self::new(PermissionState::Granted, PermissionState::Granted)
    }

    /// Permission denied, prompt included.
    pub fn denied() -> Self {
        Self::new(PermissionState::Denied, PermissionState::Denied)
    }

    /// Change the reported status.
    pub async fn set_status(&self, status: PermissionState) {
        *self.status.write().await = status;
    }

    /// Change the prompt outcome.
    pub async fn set_request_result(&self, result: PermissionState) {
        *self.request_result.write().await = result;
    }

    /// Number of status checks performed.
    pub async fn status_count(&self) -> usize {
        *self.status_count.read().await
    }

    /// Number of prompts shown.
    pub async fn request_count(&self) -> usize {
        *self.request_count.read().await
    }
}

#[async_trait]
impl PermissionProvider for MockPermissions {
    async fn status(&self) -> PermissionState {
        *self.status_count.write().await += 1;
        *self.status.read().await
    }

    async fn request(&self) -> PermissionState {
        *self.request_count.write().await += 1;
        *self.request_result.read().await
    }
}
