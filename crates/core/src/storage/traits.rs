//! Trait definitions for the storage module.

use async_trait::async_trait;

use super::error::StorageError;

/// Permanent file storage for conversion results.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Returns the name of this store implementation.
    fn name(&self) -> &str;

    /// Locator prefix of permanent storage. Output files live directly
    /// under this root.
    fn permanent_root(&self) -> String;

    /// Moves a file from `from` to `to`.
    ///
    /// The source is consumed: after a successful move it no longer exists
    /// at its old locator.
    async fn move_file(&self, from: &str, to: &str) -> Result<(), StorageError>;
}
