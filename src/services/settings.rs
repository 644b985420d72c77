// Operator settings persisted through local storage
//
// Two opaque strings, stored verbatim under fixed keys. Validation is only
// "non-blank at save time"; loading never validates.

use super::traits::{LocalStorage, SettingsStore};
use crate::error::{ExorcistError, Result, SettingsField};
use async_trait::async_trait;
use std::sync::Arc;

/// The two persisted operator settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub openai_api_key: String,
    pub github_repo_url: String,
}

impl Settings {
    pub fn new(openai_api_key: impl Into<String>, github_repo_url: impl Into<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.into(),
            github_repo_url: github_repo_url.into(),
        }
    }

    /// Fields that are empty after trimming, in form order
    pub fn missing_fields(&self) -> Vec<SettingsField> {
        let mut missing = Vec::new();
        if self.openai_api_key.trim().is_empty() {
            missing.push(SettingsField::OpenAiApiKey);
        }
        if self.github_repo_url.trim().is_empty() {
            missing.push(SettingsField::GithubRepoUrl);
        }
        missing
    }

    /// # Errors
    /// `ExorcistError::Validation` listing every blank field
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ExorcistError::Validation { missing })
        }
    }
}

/// `SettingsStore` on top of any `LocalStorage`
pub struct LocalSettingsStore {
    storage: Arc<dyn LocalStorage>,
}

impl LocalSettingsStore {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    async fn read_field(&self, field: SettingsField) -> Result<String> {
        Ok(self
            .storage
            .get_item(field.storage_key())
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl SettingsStore for LocalSettingsStore {
    async fn load(&self) -> Result<Settings> {
        let settings = Settings {
            openai_api_key: self.read_field(SettingsField::OpenAiApiKey).await?,
            github_repo_url: self.read_field(SettingsField::GithubRepoUrl).await?,
        };

        // Never log the key itself
        tracing::info!(
            "Loaded settings (api key: {} chars, repo url: {:?})",
            settings.openai_api_key.len(),
            settings.github_repo_url
        );
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        if let Err(e) = settings.validate() {
            tracing::warn!("Rejected settings save: {}", e);
            return Err(e);
        }

        // One write, so a failure never leaves a half-updated pair behind
        self.storage
            .set_items(vec![
                (
                    SettingsField::OpenAiApiKey.storage_key().to_string(),
                    settings.openai_api_key.clone(),
                ),
                (
                    SettingsField::GithubRepoUrl.storage_key().to_string(),
                    settings.github_repo_url.clone(),
                ),
            ])
            .await?;

        tracing::info!("Saved settings for repo {:?}", settings.github_repo_url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mocks::test_helpers::*;
    use crate::services::MemoryLocalStorage;

    fn store_over(storage: Arc<MemoryLocalStorage>) -> LocalSettingsStore {
        LocalSettingsStore::new(storage as Arc<dyn LocalStorage>)
    }

    #[tokio::test]
    async fn test_load_defaults_to_empty() {
        let store = store_over(Arc::new(MemoryLocalStorage::new()));
        let settings = store.load().await.unwrap();
        assert_eq!(settings, Settings::new("", ""));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = store_over(Arc::new(MemoryLocalStorage::new()));
        let settings = Settings::new("sk-test", "https://github.com/a/b");

        store.save(&settings).await.unwrap();
        assert_eq!(store.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_save_keeps_values_verbatim() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let store = store_over(storage.clone());

        store
            .save(&Settings::new("  sk-padded ", "https://github.com/a/b\t"))
            .await
            .unwrap();

        assert_eq!(
            storage.snapshot(),
            vec![
                ("github_repo_url".to_string(), "https://github.com/a/b\t".to_string()),
                ("openai_api_key".to_string(), "  sk-padded ".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_field_rejected_and_storage_untouched() {
        let storage = Arc::new(MemoryLocalStorage::with_items([
            ("openai_api_key", "sk-old"),
            ("github_repo_url", "https://github.com/old/repo"),
        ]));
        let store = store_over(storage.clone());
        let before = storage.snapshot();

        for settings in [
            Settings::new("", "https://github.com/a/b"),
            Settings::new("sk-new", "   "),
            Settings::new(" \n", ""),
        ] {
            let err = store.save(&settings).await.unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(storage.snapshot(), before);
    }

    #[test]
    fn test_missing_fields_order() {
        assert_eq!(
            Settings::new(" ", "").missing_fields(),
            vec![SettingsField::OpenAiApiKey, SettingsField::GithubRepoUrl]
        );
        assert_eq!(
            Settings::new("sk", "").missing_fields(),
            vec![SettingsField::GithubRepoUrl]
        );
        assert!(Settings::new("sk", "url").missing_fields().is_empty());
    }

    #[tokio::test]
    async fn test_validation_failure_never_touches_storage() {
        // No expectations set: any call into storage would panic
        let mock = create_strict_mock_storage();
        let store = LocalSettingsStore::new(Arc::new(mock));

        let result = store.save(&Settings::new("", "")).await;
        assert!(matches!(result, Err(ExorcistError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_save_writes_both_fields_at_once() {
        // set_item has no expectation, so a per-field write would panic
        let mut mock = create_strict_mock_storage();
        mock.expect_set_items()
            .times(1)
            .withf(|items| {
                items
                    == &vec![
                        ("openai_api_key".to_string(), "sk-test".to_string()),
                        (
                            "github_repo_url".to_string(),
                            "https://github.com/a/b".to_string(),
                        ),
                    ]
            })
            .returning(|_| Ok(()));

        let store = LocalSettingsStore::new(Arc::new(mock));
        store.save(&create_test_settings()).await.unwrap();
    }

    #[tokio::test]
    async fn test_storage_error_surfaces_on_load() {
        let mut mock = create_strict_mock_storage();
        mock.expect_get_item().returning(|_| {
            Err(ExorcistError::StorageError("unreadable".to_string()))
        });

        let store = LocalSettingsStore::new(Arc::new(mock));
        assert!(matches!(
            store.load().await,
            Err(ExorcistError::StorageError(_))
        ));
    }
}
