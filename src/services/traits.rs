// Core trait definitions for service layer dependency injection
//
// Design Decision: Trait-based abstractions for infrastructure concerns
//
// The dashboard touches exactly two pieces of infrastructure: the disk (for the
// local storage file and log exports) and configuration. Each sits behind a
// trait so views and the settings form can be exercised against in-memory
// fakes or mockall mocks.
//
// All traits are marked Send + Sync so they can be shared through Arc and
// driven from the tokio runtime owned by the app.

use super::settings::Settings;
use crate::error::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::path::{Path, PathBuf};

/// Filesystem abstraction for file I/O operations
///
/// Provides async file operations to enable dependency injection and testing.
///
/// Usage:
///     let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
///     let content = fs.read_to_string(Path::new("local_storage.json")).await?;
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read entire file contents as a UTF-8 string
    ///
    /// # Errors
    /// - File not found
    /// - Permission denied
    /// - Invalid UTF-8 encoding
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write string content to a file (creates or overwrites)
    ///
    /// # Errors
    /// - Permission denied
    /// - Disk full
    /// - Invalid path
    async fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Check if a path exists (file or directory)
    ///
    /// Returns false on permission errors (cannot distinguish from non-existence)
    async fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories (like mkdir -p)
    async fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// String key/value storage with `localStorage` semantics
///
/// Values are opaque strings stored verbatim. There is deliberately no
/// remove operation: nothing in the dashboard ever deletes a stored value.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocalStorage: Send + Sync {
    /// Get the value stored under `key`, or None if it was never set
    ///
    /// # Errors
    /// - Backing store unreadable or corrupt
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// - Backing store unwritable
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Store several pairs in one write; either all of them land or none do
    ///
    /// # Errors
    /// - Backing store unwritable
    async fn set_items(&self, items: Vec<(String, String)>) -> Result<()>;
}

/// Persistence boundary for the two operator settings
///
/// Usage:
///     let store: Arc<dyn SettingsStore> = Arc::new(LocalSettingsStore::new(storage));
///     let settings = store.load().await?;
///     store.save(&Settings::new("sk-...", "https://github.com/a/b")).await?;
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load both settings, each defaulting to an empty string when unset
    async fn load(&self) -> Result<Settings>;

    /// Validate and persist both settings verbatim
    ///
    /// # Errors
    /// - `ExorcistError::Validation` if either field is blank after trimming;
    ///   nothing is written in that case
    /// - Storage errors from the backing `LocalStorage`
    async fn save(&self, settings: &Settings) -> Result<()>;
}

/// Configuration service for application paths
///
/// Configuration is resolved once at startup and cached in memory.
#[cfg_attr(test, automock)]
pub trait ConfigService: Send + Sync {
    /// Directory holding the local storage file
    fn data_dir(&self) -> PathBuf;

    /// Directory that exported log files are written into
    fn export_dir(&self) -> PathBuf;

    /// Full path of the local storage file
    fn storage_path(&self) -> PathBuf {
        self.data_dir().join(super::storage::STORAGE_FILE_NAME)
    }
}
