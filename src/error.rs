// Centralized error handling using thiserror for type-safe error management
//
// Design Decision: One error enum, one user-facing variant
//
// Only `Validation` is ever shown to the operator (as a modal notice). Every
// other variant describes an infrastructure failure that the UI does not try
// to recover from: it reaches the app boundary and is logged.
//
// Extension Points: Add new error variants as needed for specific failure modes

use std::fmt;
use thiserror::Error;

/// A settings field that must be non-empty before it can be saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    OpenAiApiKey,
    GithubRepoUrl,
}

impl SettingsField {
    /// Storage key under which the field is persisted
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::OpenAiApiKey => "openai_api_key",
            Self::GithubRepoUrl => "github_repo_url",
        }
    }

    /// Human-readable label used in forms and notices
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAiApiKey => "OpenAI API Key",
            Self::GithubRepoUrl => "GitHub Repository URL",
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Main error type for Bug Exorcist
///
/// Error Handling Strategy:
/// - Validation: the only error an operator ever sees
/// - IO errors: Automatically converted via #[from] IoError variant
/// - Serde errors: Automatically converted via #[from] SerdeError variant
/// - Everything else: specific variants carrying a context message
#[derive(Debug, Error)]
pub enum ExorcistError {
    /// Required settings were blank (after trimming) at save time
    ///
    /// `missing` lists the offending fields in form order and is never empty.
    #[error("Validation error: missing {}", join_fields(.missing))]
    Validation { missing: Vec<SettingsField> },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Local storage could not be read, parsed or written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Log export could not be produced or written
    #[error("Export error: {0}")]
    ExportError(String),

    /// Environment variable present but unusable
    #[error("Environment error: {0}")]
    EnvError(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl ExorcistError {
    /// True for the one error kind that is reported to the operator
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

fn join_fields(fields: &[SettingsField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Type alias for Result with ExorcistError
pub type Result<T> = std::result::Result<T, ExorcistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExorcistError::StorageError("Failed to save".to_string());
        assert_eq!(err.to_string(), "Storage error: Failed to save");

        let err = ExorcistError::Validation {
            missing: vec![SettingsField::OpenAiApiKey, SettingsField::GithubRepoUrl],
        };
        assert_eq!(
            err.to_string(),
            "Validation error: missing OpenAI API Key, GitHub Repository URL"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExorcistError = io_err.into();

        match err {
            ExorcistError::IoError(_) => {}
            _ => panic!("Expected IoError variant"),
        }
    }

    #[test]
    fn test_is_validation() {
        let err = ExorcistError::Validation {
            missing: vec![SettingsField::GithubRepoUrl],
        };
        assert!(err.is_validation());
        assert!(!ExorcistError::ExportError("disk full".to_string()).is_validation());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(SettingsField::OpenAiApiKey.storage_key(), "openai_api_key");
        assert_eq!(SettingsField::GithubRepoUrl.storage_key(), "github_repo_url");
    }
}
