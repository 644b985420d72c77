// Shell chrome: sidebar, top bar and the save notice
//
// These methods only read the shell state. Anything the operator does is
// queued through `dispatch` and applied after the frame.

use crate::ui::theme::{self, BORDER, NEON, PANEL_BG, WHITE};
use bug_exorcist::pages::{APP_TITLE, PROFILE_LEVEL, PROFILE_NAME};
use bug_exorcist::shell::{menu_with_active, MenuItem, SIDEBAR_WIDTH};
use bug_exorcist::{version, Route, ShellAction};
use eframe::egui;
use egui_phosphor::regular as icons;

const HEADER_HEIGHT: f32 = 64.0;
const SEARCH_WIDTH: f32 = 256.0;

impl crate::ExorcistApp {
    pub fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .frame(
                egui::Frame::new()
                    .fill(PANEL_BG)
                    .stroke(egui::Stroke::new(1.0, BORDER))
                    .inner_margin(egui::Margin::symmetric(16, 24)),
            )
            .show(ctx, |ui| {
                // Logo
                ui.horizontal(|ui| {
                    egui::Frame::new()
                        .fill(theme::neon(0.2))
                        .stroke(egui::Stroke::new(1.0, theme::neon(0.5)))
                        .corner_radius(4)
                        .inner_margin(8)
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(icons::BUG_BEETLE).size(22.0));
                        });
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(APP_TITLE).size(20.0).strong());
                });
                ui.add_space(40.0);

                let current_path = self.state.navigator().current_path().to_string();
                let mut selected = None;
                for (item, active) in menu_with_active(&current_path) {
                    if menu_entry(ui, &item, active).clicked() {
                        selected = Some(item.route);
                    }
                    ui.add_space(8.0);
                }
                if let Some(route) = selected {
                    self.dispatch(ShellAction::Navigate(route));
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.label(
                        egui::RichText::new(version::version_string())
                            .size(10.0)
                            .color(theme::neon(0.3)),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        egui::Frame::new()
                            .fill(theme::neon(0.2))
                            .stroke(egui::Stroke::new(1.0, theme::neon(0.4)))
                            .corner_radius(20)
                            .inner_margin(8)
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(icons::USER).size(18.0));
                            });
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(PROFILE_NAME)
                                    .size(12.0)
                                    .strong()
                                    .color(WHITE),
                            );
                            ui.label(theme::caption(PROFILE_LEVEL, 0.4));
                        });
                    });
                    ui.separator();
                });
            });
    }

    pub fn render_header(&mut self, ctx: &egui::Context) {
        let focus_search = self.state.take_search_focus();
        let on_settings = self.state.navigator().current_route() == Some(Route::Settings);

        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG)
                    .stroke(egui::Stroke::new(1.0, BORDER))
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let toggle_icon = if self.state.shell().sidebar_open() {
                        icons::TEXT_OUTDENT
                    } else {
                        icons::LIST
                    };
                    if square_button(ui, toggle_icon, false)
                        .on_hover_text("Toggle sidebar (⌘B)")
                        .clicked()
                    {
                        self.dispatch(ShellAction::ToggleSidebar);
                    }

                    if self.state.shell().search_open() {
                        ui.add_space(8.0);
                        let mut query = self.state.shell().search_query().to_string();
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut query)
                                .hint_text("SEARCH_DATABASE...")
                                .desired_width(SEARCH_WIDTH)
                                .font(egui::TextStyle::Small),
                        );
                        if focus_search {
                            response.request_focus();
                        }
                        if response.changed() {
                            self.dispatch(ShellAction::SetSearchQuery(query));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if square_button(ui, icons::GEAR, on_settings)
                            .on_hover_text("Settings")
                            .clicked()
                        {
                            self.dispatch(ShellAction::Navigate(Route::Settings));
                        }
                        if square_button(ui, icons::DOWNLOAD_SIMPLE, false)
                            .on_hover_text("Download System Logs")
                            .clicked()
                        {
                            self.dispatch(ShellAction::ExportLogs);
                        }
                        if square_button(ui, icons::MAGNIFYING_GLASS, self.state.shell().search_open())
                            .on_hover_text("Search (⌘F)")
                            .clicked()
                        {
                            self.dispatch(ShellAction::ToggleSearch);
                        }
                    });
                });
            });
    }

    /// Modal acknowledgment for the last save attempt
    pub fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.state.notice() else {
            return;
        };
        let message = notice.message();
        let (icon, color) = if notice.is_error() {
            (icons::WARNING, theme::DANGER)
        } else {
            (icons::CHECK_CIRCLE, NEON)
        };

        let mut acknowledged = false;
        let response = egui::Modal::new(egui::Id::new("settings_notice"))
            .frame(theme::card().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icon).size(22.0).color(color));
                    ui.label(egui::RichText::new(message).color(WHITE));
                });
                ui.add_space(16.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let ok = ui.add(
                        egui::Button::new(egui::RichText::new("OK").strong().color(theme::BG))
                            .fill(NEON)
                            .min_size(egui::vec2(72.0, 28.0)),
                    );
                    ok.request_focus();
                    if ok.clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged || response.should_close() {
            self.state.dismiss_notice();
        }
    }
}

fn menu_entry(ui: &mut egui::Ui, item: &MenuItem, active: bool) -> egui::Response {
    let (fill, stroke, color) = if active {
        (theme::neon(0.1), theme::neon(0.5), NEON)
    } else {
        (egui::Color32::TRANSPARENT, egui::Color32::TRANSPARENT, theme::neon(0.6))
    };

    let label = if active {
        format!("{}  {}   ●", item.icon, item.name.to_uppercase())
    } else {
        format!("{}  {}", item.icon, item.name.to_uppercase())
    };

    ui.add_sized(
        [ui.available_width(), 44.0],
        egui::Button::new(egui::RichText::new(label).strong().color(color))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(8),
    )
}

fn square_button(ui: &mut egui::Ui, icon: &str, highlighted: bool) -> egui::Response {
    let (fill, stroke, color) = if highlighted {
        (theme::neon(0.2), NEON, NEON)
    } else {
        (egui::Color32::TRANSPARENT, BORDER, theme::neon(0.7))
    };

    ui.add_sized(
        [40.0, 40.0],
        egui::Button::new(egui::RichText::new(icon).size(20.0).color(color))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(4),
    )
}
