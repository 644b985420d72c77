// Settings form state
//
// The form owns its two edit buffers and a `mounted` flag. Nothing is read
// from storage until `mount` runs, and the view draws nothing before that.

use crate::error::{ExorcistError, Result, SettingsField};
use crate::services::{Settings, SettingsStore};

pub const SAVED_MESSAGE: &str = "Settings saved successfully!";
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please fill in both the OpenAI API Key and GitHub Repository URL.";

/// Blocking acknowledgment shown after a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved,
    MissingFields(Vec<SettingsField>),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Saved => SAVED_MESSAGE,
            Notice::MissingFields(_) => MISSING_FIELDS_MESSAGE,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::MissingFields(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    mounted: bool,
    pub openai_api_key: String,
    pub github_repo_url: String,
}

impl SettingsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Load stored values into the buffers; later calls are no-ops
    ///
    /// # Errors
    /// Storage errors from the store. The form stays unmounted in that case.
    pub async fn mount(&mut self, store: &dyn SettingsStore) -> Result<()> {
        if self.mounted {
            return Ok(());
        }

        let settings = store.load().await?;
        self.openai_api_key = settings.openai_api_key;
        self.github_repo_url = settings.github_repo_url;
        self.mounted = true;
        Ok(())
    }

    pub fn settings(&self) -> Settings {
        Settings::new(self.openai_api_key.clone(), self.github_repo_url.clone())
    }

    /// Save the buffers and produce the notice to show
    ///
    /// Validation failures become `Notice::MissingFields`; any other error is
    /// returned as-is.
    pub async fn save(&self, store: &dyn SettingsStore) -> Result<Notice> {
        match store.save(&self.settings()).await {
            Ok(()) => Ok(Notice::Saved),
            Err(ExorcistError::Validation { missing }) => Ok(Notice::MissingFields(missing)),
            Err(e) => Err(e),
        }
    }
}
