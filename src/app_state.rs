// Page coordination behind the window
//
// The binary draws; this type decides. It owns the shell state, the current
// location and the settings form, applies queued `ShellAction`s, and runs the
// settings load/save and log export against the injected services. The UI
// thread blocks on its async methods through the runtime it owns.
//
// Page lifetime: the settings form only exists while /settings is the current
// route. Leaving the page discards it together with any unsaved edits, so the
// next visit loads from storage again.

use crate::app_builder::AppDependencies;
use crate::export::LogExporter;
use crate::services::SettingsStore;
use crate::settings_form::{Notice, SettingsForm};
use crate::shell::{Navigator, Route, ShellAction, ShellEffect, ShellState};
use std::sync::Arc;

pub struct AppState {
    settings: Arc<dyn SettingsStore>,
    exporter: Arc<LogExporter>,

    shell: ShellState,
    navigator: Navigator,
    pending_actions: Vec<ShellAction>,

    settings_form: SettingsForm,
    // Set when loading failed during the current visit; cleared on the next one
    settings_load_failed: bool,

    notice: Option<Notice>,
}

impl AppState {
    pub fn new(settings: Arc<dyn SettingsStore>, exporter: Arc<LogExporter>) -> Self {
        Self {
            settings,
            exporter,
            shell: ShellState::new(),
            navigator: Navigator::default(),
            pending_actions: Vec::new(),
            settings_form: SettingsForm::new(),
            settings_load_failed: false,
            notice: None,
        }
    }

    pub fn from_deps(deps: &AppDependencies) -> Self {
        Self::new(Arc::clone(&deps.settings), Arc::clone(&deps.exporter))
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// See `ShellState::take_search_focus`
    pub fn take_search_focus(&mut self) -> bool {
        self.shell.take_search_focus()
    }

    pub fn settings_form(&self) -> &SettingsForm {
        &self.settings_form
    }

    pub fn settings_form_mut(&mut self) -> &mut SettingsForm {
        &mut self.settings_form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Queue an action reported by a view
    pub fn dispatch(&mut self, action: ShellAction) {
        self.pending_actions.push(action);
    }

    /// Apply every queued action in order
    ///
    /// Export failures are logged and otherwise ignored.
    pub async fn apply_pending_actions(&mut self) {
        for action in std::mem::take(&mut self.pending_actions) {
            match self.shell.apply(action) {
                ShellEffect::None => {}
                ShellEffect::Navigate(route) => self.navigate(route),
                ShellEffect::ExportLogs => match self.exporter.export_logs().await {
                    Ok(path) => tracing::info!("Logs exported to {}", path.display()),
                    Err(e) => tracing::error!("Log export failed: {}", e),
                },
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        let leaving = self.navigator.current_route();
        if leaving == Some(route) {
            return;
        }

        if leaving == Some(Route::Settings) {
            // Unsaved edits go away with the page
            self.settings_form = SettingsForm::new();
        }
        if route == Route::Settings {
            self.settings_load_failed = false;
        }

        self.navigator.push(route);
    }

    /// Load stored settings into the form once per visit
    ///
    /// Called by the settings page when it is on screen. A failed load is
    /// logged and not retried until the page is visited again.
    pub async fn mount_settings(&mut self) {
        if self.settings_form.is_mounted() || self.settings_load_failed {
            return;
        }

        if let Err(e) = self.settings_form.mount(self.settings.as_ref()).await {
            tracing::error!("Failed to load settings: {}", e);
            self.settings_load_failed = true;
        }
    }

    /// Save the form and raise the notice for the outcome
    pub async fn save_settings(&mut self) {
        match self.settings_form.save(self.settings.as_ref()).await {
            Ok(notice) => self.notice = Some(notice),
            Err(e) => tracing::error!("Failed to save settings: {}", e),
        }
    }
}
