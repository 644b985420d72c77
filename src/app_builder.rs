// AppBuilder pattern for dependency construction and injection
//
// Design Decision: Builder pattern with dependency injection for testability
//
// Production wiring reads configuration from the environment and persists to
// disk; test wiring swaps in mocks and the in-memory local storage. Either way
// the app only ever sees an `AppDependencies`.
//
// Usage Example:
//     // Production
//     let deps = AppBuilder::new()
//         .with_production_deps()?
//         .build()?;
//
//     // Testing
//     let deps = AppBuilder::new()
//         .with_test_deps()
//         .build()?;

use crate::error::{ExorcistError, Result};
use crate::export::LogExporter;
use crate::services::{
    ConfigService, FileConfigService, FileLocalStorage, FileSystem, LocalSettingsStore,
    LocalStorage, RealFileSystem, SettingsStore,
};
use std::sync::Arc;

/// Builder for constructing the dashboard's dependencies
///
/// # Examples
///
/// ```no_run
/// use bug_exorcist::AppBuilder;
///
/// fn main() -> bug_exorcist::Result<()> {
///     let deps = AppBuilder::new()
///         .with_production_deps()?
///         .build()?;
///
///     // Use dependencies...
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct AppBuilder {
    filesystem: Option<Arc<dyn FileSystem>>,
    config: Option<Arc<dyn ConfigService>>,
    local_storage: Option<Arc<dyn LocalStorage>>,
    settings: Option<Arc<dyn SettingsStore>>,
    exporter: Option<Arc<LogExporter>>,
    runtime: Option<Arc<tokio::runtime::Runtime>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use production dependencies
    ///
    /// Creates real implementations of all services:
    /// - RealFileSystem for file I/O
    /// - FileConfigService resolved from the environment
    /// - FileLocalStorage at the configured storage path
    /// - LocalSettingsStore on top of it
    /// - LogExporter into the configured export directory
    /// - a tokio runtime the UI thread blocks on
    ///
    /// Dependencies that were already overridden are kept.
    ///
    /// # Errors
    /// - Configuration cannot be resolved
    /// - Runtime cannot be created
    pub fn with_production_deps(mut self) -> Result<Self> {
        let filesystem = self
            .filesystem
            .take()
            .unwrap_or_else(|| Arc::new(RealFileSystem) as Arc<dyn FileSystem>);

        let config = match self.config.take() {
            Some(config) => config,
            None => Arc::new(FileConfigService::load()?) as Arc<dyn ConfigService>,
        };

        let local_storage = self.local_storage.take().unwrap_or_else(|| {
            Arc::new(FileLocalStorage::new(
                filesystem.clone(),
                config.storage_path(),
            )) as Arc<dyn LocalStorage>
        });

        let settings = self.settings.take().unwrap_or_else(|| {
            Arc::new(LocalSettingsStore::new(local_storage.clone())) as Arc<dyn SettingsStore>
        });

        let exporter = self.exporter.take().unwrap_or_else(|| {
            Arc::new(LogExporter::new(filesystem.clone(), config.export_dir()))
        });

        let runtime = match self.runtime.take() {
            Some(runtime) => runtime,
            None => Arc::new(tokio::runtime::Runtime::new().map_err(|e| {
                ExorcistError::ConfigError(format!("Failed to create runtime: {}", e))
            })?),
        };

        self.filesystem = Some(filesystem);
        self.config = Some(config);
        self.local_storage = Some(local_storage);
        self.settings = Some(settings);
        self.exporter = Some(exporter);
        self.runtime = Some(runtime);

        Ok(self)
    }

    /// Use test dependencies
    ///
    /// - Mock filesystem on which every operation succeeds
    /// - Mock config with fixed paths
    /// - In-memory local storage and a real settings store over it
    ///
    /// No runtime is created; tests already run inside one.
    #[cfg(test)]
    pub fn with_test_deps(mut self) -> Self {
        use crate::services::mocks::test_helpers::*;
        use crate::services::MemoryLocalStorage;

        let filesystem = Arc::new(create_existing_filesystem()) as Arc<dyn FileSystem>;
        let config = Arc::new(create_mock_config()) as Arc<dyn ConfigService>;
        let local_storage = Arc::new(MemoryLocalStorage::new()) as Arc<dyn LocalStorage>;

        self.settings = Some(Arc::new(LocalSettingsStore::new(local_storage.clone())));
        self.exporter = Some(Arc::new(LogExporter::new(
            filesystem.clone(),
            config.export_dir(),
        )));
        self.filesystem = Some(filesystem);
        self.config = Some(config);
        self.local_storage = Some(local_storage);

        self
    }

    /// Override filesystem (for testing)
    pub fn with_filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.filesystem = Some(fs);
        self
    }

    /// Override config service (for testing)
    pub fn with_config(mut self, config: Arc<dyn ConfigService>) -> Self {
        self.config = Some(config);
        self
    }

    /// Override local storage (for testing)
    pub fn with_local_storage(mut self, storage: Arc<dyn LocalStorage>) -> Self {
        self.local_storage = Some(storage);
        self
    }

    /// Override settings store (for testing)
    pub fn with_settings_store(mut self, settings: Arc<dyn SettingsStore>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Override runtime (for testing)
    pub fn with_runtime(mut self, runtime: Arc<tokio::runtime::Runtime>) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Build the configured dependencies
    ///
    /// # Errors
    /// `ConfigError` naming the first missing dependency.
    pub fn build(self) -> Result<AppDependencies> {
        Ok(AppDependencies {
            filesystem: self.filesystem.ok_or_else(|| {
                ExorcistError::ConfigError("Filesystem not configured".to_string())
            })?,
            config: self
                .config
                .ok_or_else(|| ExorcistError::ConfigError("Config not configured".to_string()))?,
            local_storage: self.local_storage.ok_or_else(|| {
                ExorcistError::ConfigError("Local storage not configured".to_string())
            })?,
            settings: self.settings.ok_or_else(|| {
                ExorcistError::ConfigError("Settings store not configured".to_string())
            })?,
            exporter: self.exporter.ok_or_else(|| {
                ExorcistError::ConfigError("Log exporter not configured".to_string())
            })?,
            runtime: self.runtime,
        })
    }
}

/// Container for all application dependencies
///
/// # Runtime Ownership
///
/// The runtime is optional. Production wiring creates and owns one; tests
/// leave it out since they already run inside `#[tokio::test]`.
pub struct AppDependencies {
    pub filesystem: Arc<dyn FileSystem>,
    pub config: Arc<dyn ConfigService>,
    pub local_storage: Arc<dyn LocalStorage>,
    pub settings: Arc<dyn SettingsStore>,
    pub exporter: Arc<LogExporter>,
    pub runtime: Option<Arc<tokio::runtime::Runtime>>,
}
