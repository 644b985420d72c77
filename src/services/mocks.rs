// Mock test helpers and common mock patterns
//
// Reusable mock constructors with sensible defaults. Tests override specific
// behaviors while inheriting the baseline setup.
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let mut mock_fs = create_mock_filesystem();
//     mock_fs.expect_write().returning(|_, _| Ok(()));

#[cfg(test)]
pub mod test_helpers {
    use super::super::settings::Settings;
    use super::super::traits::*;
    use std::path::PathBuf;

    /// Create a mock filesystem with default "file not found" behavior
    ///
    /// Default behavior:
    /// - exists() returns false
    /// - everything else has no expectation
    pub fn create_mock_filesystem() -> MockFileSystem {
        let mut mock = MockFileSystem::new();
        mock.expect_exists().returning(|_| false);
        mock
    }

    /// Create a mock filesystem on which every operation succeeds
    ///
    /// Directories and files all "exist", reads return an empty JSON object.
    pub fn create_existing_filesystem() -> MockFileSystem {
        let mut mock = MockFileSystem::new();
        mock.expect_exists().returning(|_| true);
        mock.expect_read_to_string()
            .returning(|_| Ok("{}".to_string()));
        mock.expect_write().returning(|_, _| Ok(()));
        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock
    }

    /// Create a mock local storage with no expectations
    ///
    /// Any call panics, which makes it useful for asserting that a code path
    /// never reaches storage.
    pub fn create_strict_mock_storage() -> MockLocalStorage {
        MockLocalStorage::new()
    }

    /// Create a mock settings store returning `settings` and accepting saves
    pub fn create_mock_settings_store(settings: Settings) -> MockSettingsStore {
        let mut mock = MockSettingsStore::new();
        mock.expect_load()
            .returning(move || Ok(settings.clone()));
        mock.expect_save().returning(|s| s.validate());
        mock
    }

    /// Create a mock config service pointing at fixed test paths
    ///
    /// Default behavior:
    /// - data_dir() returns "test-data"
    /// - export_dir() returns "test-exports"
    /// - storage_path() returns "test-data/local_storage.json"
    pub fn create_mock_config() -> MockConfigService {
        let mut mock = MockConfigService::new();
        mock.expect_data_dir()
            .returning(|| PathBuf::from("test-data"));
        mock.expect_export_dir()
            .returning(|| PathBuf::from("test-exports"));
        mock.expect_storage_path()
            .returning(|| PathBuf::from("test-data").join("local_storage.json"));
        mock
    }

    /// Create a filled-in, valid Settings value
    pub fn create_test_settings() -> Settings {
        Settings::new("sk-test", "https://github.com/a/b")
    }
}

#[cfg(test)]
mod tests {
    use super::super::traits::*;
    use super::test_helpers::*;

    #[test]
    fn test_create_mock_filesystem() {
        let mock = create_mock_filesystem();
        drop(mock);
    }

    #[tokio::test]
    async fn test_create_mock_settings_store() {
        let store = create_mock_settings_store(create_test_settings());
        assert_eq!(store.load().await.unwrap(), create_test_settings());
        assert!(store.save(&create_test_settings()).await.is_ok());
    }

    #[test]
    fn test_create_mock_config() {
        let config = create_mock_config();
        assert_eq!(config.export_dir(), std::path::PathBuf::from("test-exports"));
    }
}
