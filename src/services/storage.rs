// Local storage backends
//
// Design Decision: One JSON object per data directory
//
// The dashboard's entire persistent footprint is a handful of string keys, so
// `FileLocalStorage` keeps them as a single pretty-printed JSON object and
// rewrites the whole file on every write, so a `set_items` batch lands in one
// go. Keys it does not know about are carried through untouched.
//
// `MemoryLocalStorage` has the same semantics without touching disk and is what
// tests (and `AppBuilder::with_test_deps`) substitute for the real thing.

use super::traits::{FileSystem, LocalStorage};
use crate::error::{ExorcistError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// File name of the local storage file inside the data directory
pub const STORAGE_FILE_NAME: &str = "local_storage.json";

type StorageMap = BTreeMap<String, String>;

/// File-backed local storage
///
/// Thread Safety: reads and writes go straight to disk with no caching. The
/// app only touches storage from the UI thread, one user action at a time, so
/// read-modify-write cycles never interleave.
pub struct FileLocalStorage {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileLocalStorage {
    /// Create storage backed by the JSON file at `path`
    ///
    /// The file and its parent directory are created on first write.
    pub fn new(fs: Arc<dyn FileSystem>, path: PathBuf) -> Self {
        Self { fs, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_map(&self) -> Result<StorageMap> {
        if !self.fs.exists(&self.path).await {
            return Ok(StorageMap::new());
        }

        let content = self.fs.read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(StorageMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            ExorcistError::StorageError(format!(
                "Failed to parse local storage {:?}: {}",
                self.path, e
            ))
        })
    }

    async fn write_map(&self, map: &StorageMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !self.fs.exists(parent).await {
                self.fs.create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(map).map_err(|e| {
            ExorcistError::StorageError(format!("Failed to serialize local storage: {}", e))
        })?;

        self.fs.write(&self.path, &content).await
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.set_items(vec![(key.to_string(), value.to_string())])
            .await
    }

    async fn set_items(&self, items: Vec<(String, String)>) -> Result<()> {
        let mut map = self.read_map().await?;
        let count = items.len();
        map.extend(items);
        self.write_map(&map).await?;

        tracing::debug!("Stored {} local storage key(s) in {:?}", count, self.path);
        Ok(())
    }
}

/// In-memory local storage
///
/// Starts empty unless seeded with `with_items`. Lives for as long as the
/// instance does, so "reloading" in tests means building a new store over the
/// same `MemoryLocalStorage`.
#[derive(Default)]
pub struct MemoryLocalStorage {
    items: RwLock<StorageMap>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with initial key/value pairs
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let items = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Copy of every stored pair, ordered by key
    pub fn snapshot(&self) -> Vec<(String, String)> {
        match self.items.read() {
            Ok(items) => items.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl LocalStorage for MemoryLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|_| ExorcistError::StorageError("In-memory storage poisoned".to_string()))?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| ExorcistError::StorageError("In-memory storage poisoned".to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_items(&self, new_items: Vec<(String, String)>) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| ExorcistError::StorageError("In-memory storage poisoned".to_string()))?;
        items.extend(new_items);
        Ok(())
    }
}
