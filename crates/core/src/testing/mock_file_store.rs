//! Mock file store for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::storage::{FileStore, StorageError};

/// Mock implementation of the FileStore trait.
///
/// Records moves instead of touching the filesystem.
#[derive(Debug, Clone)]
pub struct MockFileStore {
    root: String,
    moves: Arc<RwLock<Vec<(String, String)>>>,
    next_error: Arc<RwLock<Option<StorageError>>>,
}

impl MockFileStore {
    /// Create a new mock store with the given permanent root.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            moves: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Get all recorded moves as (from, to) pairs.
    pub async fn recorded_moves(&self) -> Vec<(String, String)> {
        self.moves.read().await.clone()
    }

    /// Configure the next move to fail with the given error.
    pub async fn set_next_error(&self, error: StorageError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl FileStore for MockFileStore {
    fn name(&self) -> &str {
        "mock"
    }

    fn permanent_root(&self) -> String {
        self.root.clone()
    }

    async fn move_file(&self, from: &str, to: &str) -> Result<(), StorageError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.moves
            .write()
            .await
            .push((from.to_string(), to.to_string()));
        Ok(())
    }
}
