// Service layer for dependency injection and testability
//
// Architecture Pattern: Ports and Adapters
// - Traits define "ports" (FileSystem, LocalStorage, SettingsStore, ConfigService)
// - "Adapters" (RealFileSystem, FileLocalStorage, MemoryLocalStorage,
//   LocalSettingsStore, FileConfigService) connect them to infrastructure
//
// Usage Example:
//     // Production code
//     let fs = Arc::new(RealFileSystem);
//     let storage = Arc::new(FileLocalStorage::new(fs, config.storage_path()));
//     let settings = LocalSettingsStore::new(storage).load().await?;
//
//     // Test code
//     let storage = Arc::new(MemoryLocalStorage::new());
//     let settings = LocalSettingsStore::new(storage).load().await?; // No disk I/O

pub mod config;
pub mod filesystem;
#[cfg(test)]
pub mod mocks;
pub mod settings;
pub mod storage;
pub mod traits;

// Re-export commonly used types
pub use config::FileConfigService;
pub use filesystem::RealFileSystem;
pub use settings::{LocalSettingsStore, Settings};
pub use storage::{FileLocalStorage, MemoryLocalStorage, STORAGE_FILE_NAME};
pub use traits::{ConfigService, FileSystem, LocalStorage, SettingsStore};
