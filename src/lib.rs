// Library interface for Bug Exorcist
// Everything the dashboard does that is not drawing pixels lives here, so it
// can be exercised from tests without a window.

pub mod app_builder;
pub mod app_state;
pub mod error;
pub mod export;
pub mod pages;
pub mod services;
pub mod settings_form;
pub mod shell;
pub mod terminal;
pub mod version;

// Re-export commonly used types for convenience
pub use app_builder::{AppBuilder, AppDependencies};
pub use app_state::AppState;
pub use error::{ExorcistError, Result, SettingsField};
pub use export::{LogExport, LogExporter};
pub use settings_form::{Notice, SettingsForm};
pub use shell::{MenuItem, Navigator, Route, ShellAction, ShellEffect, ShellState};
pub use terminal::{LogLine, TerminalViewer};

pub use services::{
    ConfigService, FileConfigService, FileLocalStorage, FileSystem, LocalSettingsStore,
    LocalStorage, MemoryLocalStorage, RealFileSystem, Settings, SettingsStore,
};
