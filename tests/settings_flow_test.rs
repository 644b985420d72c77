// End-to-end settings flow against the library crate
// Drives the form the way the settings page does, without a window

use bug_exorcist::services::STORAGE_FILE_NAME;
use bug_exorcist::{
    AppBuilder, ExorcistError, FileConfigService, FileLocalStorage, LocalSettingsStore,
    LocalStorage, MemoryLocalStorage, Notice, RealFileSystem, Settings, SettingsField,
    SettingsForm, SettingsStore,
};
use std::sync::Arc;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> (Arc<dyn LocalStorage>, LocalSettingsStore) {
    let storage: Arc<dyn LocalStorage> = Arc::new(FileLocalStorage::new(
        Arc::new(RealFileSystem),
        dir.path().join(STORAGE_FILE_NAME),
    ));
    let store = LocalSettingsStore::new(storage.clone());
    (storage, store)
}

#[tokio::test]
async fn test_first_visit_shows_empty_fields() {
    let store = LocalSettingsStore::new(Arc::new(MemoryLocalStorage::new()));
    let mut form = SettingsForm::new();

    form.mount(&store).await.unwrap();

    assert!(form.is_mounted());
    assert_eq!(form.settings(), Settings::default());
}

#[tokio::test]
async fn test_save_then_revisit_restores_values() {
    let temp_dir = TempDir::new().unwrap();
    let (_, store) = file_store(&temp_dir);

    let mut form = SettingsForm::new();
    form.mount(&store).await.unwrap();
    form.openai_api_key = "sk-live-123".to_string();
    form.github_repo_url = "https://github.com/acme/widgets".to_string();
    assert_eq!(form.save(&store).await.unwrap(), Notice::Saved);

    // A later visit, or a restart, builds a fresh form and store
    let (_, store) = file_store(&temp_dir);
    let mut revisit = SettingsForm::new();
    revisit.mount(&store).await.unwrap();

    assert_eq!(revisit.openai_api_key, "sk-live-123");
    assert_eq!(revisit.github_repo_url, "https://github.com/acme/widgets");
}

#[tokio::test]
async fn test_blank_field_is_rejected_and_storage_untouched() {
    let storage = Arc::new(MemoryLocalStorage::with_items([
        ("openai_api_key", "sk-old"),
        ("github_repo_url", "https://github.com/old/repo"),
    ]));
    let store = LocalSettingsStore::new(storage.clone());

    let mut form = SettingsForm::new();
    form.mount(&store).await.unwrap();
    form.github_repo_url = "   ".to_string();
    form.openai_api_key = "sk-new".to_string();

    let notice = form.save(&store).await.unwrap();
    assert_eq!(notice, Notice::MissingFields(vec![SettingsField::GithubRepoUrl]));
    assert_eq!(
        notice.message(),
        "Please fill in both the OpenAI API Key and GitHub Repository URL."
    );

    assert_eq!(
        storage.get_item("openai_api_key").await.unwrap(),
        Some("sk-old".to_string())
    );
}

#[tokio::test]
async fn test_values_are_stored_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let (storage, store) = file_store(&temp_dir);

    store
        .save(&Settings::new("  sk-padded  ", "not even a url"))
        .await
        .unwrap();

    assert_eq!(
        storage.get_item("openai_api_key").await.unwrap(),
        Some("  sk-padded  ".to_string())
    );
    assert_eq!(
        storage.get_item("github_repo_url").await.unwrap(),
        Some("not even a url".to_string())
    );
}

#[tokio::test]
async fn test_corrupt_storage_keeps_form_unmounted() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(STORAGE_FILE_NAME), "{ not json").unwrap();
    let (_, store) = file_store(&temp_dir);

    let mut form = SettingsForm::new();
    let result = form.mount(&store).await;

    assert!(matches!(result, Err(ExorcistError::StorageError(_))));
    assert!(!form.is_mounted());
}

#[test]
fn test_production_wiring_persists_under_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = Arc::new(FileConfigService::with_dirs(
        temp_dir.path().join("data"),
        temp_dir.path().join("downloads"),
    ));

    let deps = AppBuilder::new()
        .with_config(config)
        .with_production_deps()
        .unwrap()
        .build()
        .unwrap();
    let runtime = deps.runtime.clone().unwrap();

    runtime.block_on(async {
        let mut form = SettingsForm::new();
        form.mount(deps.settings.as_ref()).await.unwrap();
        form.openai_api_key = "sk-test".to_string();
        form.github_repo_url = "https://github.com/a/b".to_string();
        assert_eq!(
            form.save(deps.settings.as_ref()).await.unwrap(),
            Notice::Saved
        );
    });

    let stored =
        std::fs::read_to_string(temp_dir.path().join("data").join(STORAGE_FILE_NAME)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(value["openai_api_key"], "sk-test");
    assert_eq!(value["github_repo_url"], "https://github.com/a/b");
}
