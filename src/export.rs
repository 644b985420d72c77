// System log export
//
// Writes a fixed status snapshot to `bug_exorcist_logs_<epoch-ms>.json` in the
// configured export directory. The timestamp inside the file and the one in
// its name come from the same clock reading.

use crate::error::{ExorcistError, Result};
use crate::services::FileSystem;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

pub const SYSTEM_NAME: &str = "BUG_EXORCIST";
pub const SYSTEM_STATUS: &str = "Operational";
pub const EXPORT_FILE_PREFIX: &str = "bug_exorcist_logs_";

pub const EXPORT_LOG_LINES: [&str; 3] = [
    "Uplink established",
    "Core modules initialized",
    "Security protocols active",
];

/// The exported record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogExport {
    pub system: String,
    pub status: String,
    pub timestamp: String,
    pub logs: Vec<String>,
}

impl LogExport {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            system: SYSTEM_NAME.to_string(),
            status: SYSTEM_STATUS.to_string(),
            timestamp: iso_timestamp(now),
            logs: EXPORT_LOG_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Pretty-printed JSON with 2-space indentation
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ExorcistError::from)
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-01-31T09:15:00.123Z`
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("{}{}.json", EXPORT_FILE_PREFIX, now.timestamp_millis())
}

/// Writes log exports through the `FileSystem` abstraction
pub struct LogExporter {
    fs: Arc<dyn FileSystem>,
    export_dir: PathBuf,
}

impl LogExporter {
    pub fn new(fs: Arc<dyn FileSystem>, export_dir: PathBuf) -> Self {
        Self { fs, export_dir }
    }

    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }

    /// Export using the current wall clock
    pub async fn export_logs(&self) -> Result<PathBuf> {
        self.export_at(Utc::now()).await
    }

    /// Export as if the clock read `now`
    ///
    /// # Errors
    /// - Export directory cannot be created
    /// - File cannot be written
    pub async fn export_at(&self, now: DateTime<Utc>) -> Result<PathBuf> {
        let record = LogExport::at(now);
        let content = record.to_json().map_err(|e| {
            ExorcistError::ExportError(format!("Failed to serialize log export: {}", e))
        })?;

        if !self.fs.exists(&self.export_dir).await {
            self.fs.create_dir_all(&self.export_dir).await?;
        }

        let path = self.export_dir.join(export_file_name(now));
        self.fs.write(&path, &content).await.map_err(|e| {
            ExorcistError::ExportError(format!("Failed to write {:?}: {}", path, e))
        })?;

        tracing::info!("Exported system logs to {:?}", path);
        Ok(path)
    }
}
