// Real filesystem implementation for production use
//
// Thin wrapper around tokio::fs. Tests that need to fail I/O on purpose use
// MockFileSystem instead.

use super::traits::FileSystem;
use crate::error::{ExorcistError, Result};
use async_trait::async_trait;
use std::path::Path;

/// Real filesystem implementation using tokio::fs
///
/// Usage:
///     let fs = RealFileSystem;
///     let content = fs.read_to_string(Path::new("local_storage.json")).await?;
pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(ExorcistError::IoError)
    }

    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        tokio::fs::write(path, content)
            .await
            .map_err(ExorcistError::IoError)
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(ExorcistError::IoError)
    }
}
