//! Mock picker for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::picker::{ImagePicker, PickedFile, PickerError};

/// Mock implementation of the ImagePicker trait.
///
/// Queue outcomes ahead of time: each `pick_image` call pops one. An empty
/// queue behaves as user cancellation.
#[derive(Debug, Clone, Default)]
pub struct MockPicker {
    queue: Arc<RwLock<VecDeque<Option<PickedFile>>>>,
    next_error: Arc<RwLock<Option<PickerError>>>,
    pick_count: Arc<RwLock<usize>>,
}

impl MockPicker {
    /// Create a new mock picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful pick.
    pub async fn push_pick(&self, file: PickedFile) {
        self.queue.write().await.push_back(Some(file));
    }

    /// Queue a user cancellation.
    pub async fn push_cancelled(&self) {
        self.queue.write().await.push_back(None);
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: PickerError) {
        *self.next_error.write().await = Some(error);
    }

    /// Number of times the dialog was opened.
    pub async fn pick_count(&self) -> usize {
        *self.pick_count.read().await
    }
}

#[async_trait]
impl ImagePicker for MockPicker {
    fn name(&self) -> &str {
        "mock"
    }

    async fn pick_image(&self) -> Result<Option<PickedFile>, PickerError> {
        *self.pick_count.write().await += 1;

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        Ok(self.queue.write().await.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_empty_queue_is_cancellation() {
        let picker = MockPicker::new();
        assert!(picker.pick_image().await.unwrap().is_none());
        assert_eq!(picker.pick_count().await, 1);
    }

    #[tokio::test]
    async fn test_queued_picks_pop_in_order() {
        let picker = MockPicker::new();
        picker.push_pick(fixtures::image_file("a.png")).await;
        picker.push_cancelled().await;

        assert_eq!(picker.pick_image().await.unwrap().unwrap().name, "a.png");
        assert!(picker.pick_image().await.unwrap().is_none());
    }
}
