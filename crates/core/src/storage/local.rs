//! Local filesystem store implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::error::StorageError;
use super::traits::FileStore;

/// File store backed by a directory on the local filesystem.
///
/// Locators are interpreted as plain paths. Moves are atomic renames where
/// possible, falling back to copy+remove across filesystem boundaries.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Creates a new store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Attempts to move a file atomically (rename).
    async fn try_atomic_move(source: &Path, destination: &Path) -> Result<bool, std::io::Error> {
        match fs::rename(source, destination).await {
            Ok(()) => Ok(true),
            Err(e) => {
                // Cross-filesystem moves fail with EXDEV (18 on Linux)
                if e.kind() == std::io::ErrorKind::CrossesDevices || e.raw_os_error() == Some(18) {
                    Ok(false)
                } else {
                    Err(e)
                }
            }
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    fn name(&self) -> &str {
        "local"
    }

    fn permanent_root(&self) -> String {
        self.root.to_string_lossy().to_string()
    }

    async fn move_file(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let source = Path::new(from);
        let destination = Path::new(to);

        if !fs::try_exists(source).await.unwrap_or(false) {
            return Err(StorageError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|_| StorageError::DirectoryFailed {
                    path: parent.to_path_buf(),
                })?;
        }

        let renamed = Self::try_atomic_move(source, destination)
            .await
            .map_err(|e| StorageError::move_failed(source, destination, e))?;

        if !renamed {
            debug!(
                "cross-device move, copying {} to {}",
                source.display(),
                destination.display()
            );
            fs::copy(source, destination)
                .await
                .map_err(|e| StorageError::move_failed(source, destination, e))?;
            fs::remove_file(source)
                .await
                .map_err(|e| StorageError::move_failed(source, destination, e))?;
        }

        Ok(())
    }
}
