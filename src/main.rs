mod ui;

use anyhow::Context;
use bug_exorcist::error::ExorcistError;
use bug_exorcist::{AppBuilder, AppDependencies, AppState, Route, ShellAction, TerminalViewer};
use eframe::egui;
use std::sync::Arc;
use ui::icon::create_window_icon;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();
    tracing::info!("Starting {}", bug_exorcist::version::full_version_info());

    // Load .env.local file - try multiple locations for robustness
    // First try current directory, then executable directory
    let env_loaded = dotenvy::from_filename(".env.local").is_ok()
        || std::env::current_exe()
            .ok()
            .and_then(|exe_path| exe_path.parent().map(|dir| dir.join(".env.local")))
            .map(|path| dotenvy::from_path(path).is_ok())
            .unwrap_or(false);

    if !env_loaded {
        tracing::debug!(".env.local file not found - using environment and defaults");
    }

    let deps = AppBuilder::new()
        .with_production_deps()
        .context("Failed to build dependencies")?
        .build()
        .context("Failed to finalize dependencies")?;

    tracing::info!(
        "Storage at {}, exports to {}",
        deps.config.storage_path().display(),
        deps.exporter.export_dir().display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Bug Exorcist")
            .with_icon(create_window_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "bug-exorcist",
        options,
        Box::new(move |cc| {
            ui::theme::install_fonts(&cc.egui_ctx);
            ui::theme::apply(&cc.egui_ctx);

            let app = ExorcistApp::new(deps)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Window closed with error: {}", e))
}

pub(crate) struct ExorcistApp {
    runtime: Arc<tokio::runtime::Runtime>,

    // Shell, pages and notice; everything the views decide goes through here
    state: AppState,

    terminal: TerminalViewer,
}

impl ExorcistApp {
    fn new(deps: AppDependencies) -> Result<Self, ExorcistError> {
        let runtime = deps.runtime.clone().ok_or_else(|| {
            ExorcistError::ConfigError("Runtime is required for ExorcistApp".to_string())
        })?;

        Ok(Self {
            runtime,
            state: AppState::from_deps(&deps),
            terminal: TerminalViewer::new(None),
        })
    }

    /// Queue an action reported by a view; applied after the frame is drawn
    pub(crate) fn dispatch(&mut self, action: ShellAction) {
        self.state.dispatch(action);
    }

    /// Run the one-time settings load, once the page is actually on screen
    pub(crate) fn mount_settings(&mut self) {
        self.runtime.block_on(self.state.mount_settings());
    }

    pub(crate) fn save_settings(&mut self) {
        self.runtime.block_on(self.state.save_settings());
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (quit, toggle_sidebar, toggle_search) = ctx.input(|i| {
            let command = i.modifiers.command;
            (
                command && i.key_pressed(egui::Key::Q),
                command && i.key_pressed(egui::Key::B),
                command && i.key_pressed(egui::Key::F),
            )
        });

        // Cmd+Q (macOS) or Ctrl+Q (Windows/Linux) to quit application
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if toggle_sidebar {
            self.dispatch(ShellAction::ToggleSidebar);
        }
        if toggle_search {
            self.dispatch(ShellAction::ToggleSearch);
        }
    }
}

impl eframe::App for ExorcistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Modal input must not leak into shortcuts behind it
        if self.state.notice().is_none() {
            self.handle_shortcuts(ctx);
        }

        if self.state.shell().sidebar_open() {
            self.render_sidebar(ctx);
        }
        self.render_header(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(ui::theme::BG)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| match self.state.navigator().current_route() {
                Some(Route::Dashboard) => self.render_dashboard(ui),
                Some(Route::Settings) => self.render_settings_view(ui),
                Some(route @ (Route::Bugs | Route::History)) => {
                    self.render_empty_state(ui, route)
                }
                None => self.render_not_found(ui),
            });

        self.render_notice(ctx);
        self.runtime.block_on(self.state.apply_pending_actions());
    }
}
