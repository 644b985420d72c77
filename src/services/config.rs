// Configuration service implementation
//
// Design Decision: Environment variables over platform defaults
//
// The dashboard needs exactly two paths: where local storage lives and where
// exported logs land. Both default to the platform directories reported by
// `dirs`, and either can be overridden through the environment (or a
// `.env.local` file loaded by the binary before this runs).

use super::traits::ConfigService;
use crate::error::{ExorcistError, Result};
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BUG_EXORCIST_DATA_DIR";

/// Environment variable overriding the export directory
pub const EXPORT_DIR_ENV: &str = "BUG_EXORCIST_EXPORT_DIR";

const APP_DIR_NAME: &str = "bug-exorcist";

/// Environment-backed configuration service
///
/// Thread Safety: All config is immutable after loading, safe to share.
///
/// Usage:
///     let config = FileConfigService::load()?;
///     let storage_file = config.storage_path();
#[derive(Debug, Clone)]
pub struct FileConfigService {
    data_dir: PathBuf,
    export_dir: PathBuf,
}

impl FileConfigService {
    /// Resolve configuration from the environment
    ///
    /// Environment Variables:
    /// - BUG_EXORCIST_DATA_DIR (optional): defaults to `<data dir>/bug-exorcist`
    /// - BUG_EXORCIST_EXPORT_DIR (optional): defaults to the downloads folder,
    ///   then to the data directory
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// - Variable set to non-UTF-8 content
    pub fn load() -> Result<Self> {
        let data_dir = match read_path_var(DATA_DIR_ENV)? {
            Some(dir) => dir,
            None => default_data_dir(),
        };

        let export_dir = match read_path_var(EXPORT_DIR_ENV)? {
            Some(dir) => dir,
            None => dirs::download_dir().unwrap_or_else(|| data_dir.clone()),
        };

        tracing::info!(
            "Configuration resolved: data dir {:?}, export dir {:?}",
            data_dir,
            export_dir
        );

        Ok(Self {
            data_dir,
            export_dir,
        })
    }

    /// Build a configuration with explicit paths
    pub fn with_dirs(data_dir: PathBuf, export_dir: PathBuf) -> Self {
        Self {
            data_dir,
            export_dir,
        }
    }
}

impl ConfigService for FileConfigService {
    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }
}

fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR_NAME),
        None => {
            tracing::warn!("No platform data directory, falling back to ./.{}", APP_DIR_NAME);
            PathBuf::from(format!(".{}", APP_DIR_NAME))
        }
    }
}

fn read_path_var(name: &str) -> Result<Option<PathBuf>> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ExorcistError::EnvError(format!(
            "{} is not valid UTF-8",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::STORAGE_FILE_NAME;
    use std::sync::Mutex;

    // Serialize config tests to avoid env var conflicts
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_with_custom_values() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();

        std::env::set_var(DATA_DIR_ENV, "/tmp/exorcist-data");
        std::env::set_var(EXPORT_DIR_ENV, "/tmp/exorcist-exports");

        let config = FileConfigService::load().unwrap();

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/exorcist-data"));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exorcist-exports"));
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/exorcist-data").join(STORAGE_FILE_NAME)
        );

        std::env::remove_var(DATA_DIR_ENV);
        std::env::remove_var(EXPORT_DIR_ENV);
    }

    #[test]
    fn test_config_empty_values_use_defaults() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();

        std::env::set_var(DATA_DIR_ENV, "   ");
        std::env::remove_var(EXPORT_DIR_ENV);

        let config = FileConfigService::load().unwrap();
        assert_eq!(config.data_dir(), default_data_dir());

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_export_dir_falls_back_when_unset() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();

        std::env::set_var(DATA_DIR_ENV, "/tmp/exorcist-data");
        std::env::remove_var(EXPORT_DIR_ENV);

        let config = FileConfigService::load().unwrap();
        let expected = dirs::download_dir().unwrap_or_else(|| PathBuf::from("/tmp/exorcist-data"));
        assert_eq!(config.export_dir(), expected);

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_override_paths_are_not_trimmed() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();

        std::env::set_var(DATA_DIR_ENV, "/tmp/exorcist data ");
        std::env::set_var(EXPORT_DIR_ENV, " exports");

        let config = FileConfigService::load().unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/exorcist data "));
        assert_eq!(config.export_dir(), PathBuf::from(" exports"));

        std::env::remove_var(DATA_DIR_ENV);
        std::env::remove_var(EXPORT_DIR_ENV);
    }

    #[test]
    fn test_with_dirs() {
        let config = FileConfigService::with_dirs(PathBuf::from("data"), PathBuf::from("out"));
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.export_dir(), PathBuf::from("out"));
    }
}
