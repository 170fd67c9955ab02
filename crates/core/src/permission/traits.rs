//! Trait definitions for the permission module.

use async_trait::async_trait;

use super::types::PermissionState;

/// The platform permission service.
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    /// Returns the current permission state without prompting.
    async fn status(&self) -> PermissionState;

    /// Prompts the user and suspends until they answer.
    ///
    /// Platforms answer a permanently-denied request with `Denied` without
    /// showing a prompt.
    async fn request(&self) -> PermissionState;
}
