// Page rendering for ExorcistApp
// One method per route; the terminal lives in its own module.

use crate::ui::theme::{self, BORDER, NEON, WHITE};
use bug_exorcist::pages::{settings_copy, EmptyStatePage, DASHBOARD_STATS, STAT_CARD_FILL};
use bug_exorcist::Route;
use eframe::egui;
use egui_phosphor::regular as icons;

const STAT_CARD_GAP: f32 = 16.0;

impl crate::ExorcistApp {
    /// Four stat cards in a row, then the terminal filling the rest
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let columns = DASHBOARD_STATS.len() as f32;
        let card_width =
            ((ui.available_width() - STAT_CARD_GAP * (columns - 1.0)) / columns).max(140.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = STAT_CARD_GAP;
            for stat in DASHBOARD_STATS.iter() {
                theme::card().show(ui, |ui| {
                    // Frame margins come on top of the requested width
                    ui.set_width(card_width - 32.0);
                    ui.horizontal(|ui| {
                        ui.label(theme::caption(stat.label, 0.6));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(stat.icon)
                                    .size(20.0)
                                    .color(theme::tone_color(stat.tone)),
                            );
                        });
                    });
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(stat.value).size(30.0).strong());
                    ui.add_space(8.0);
                    theme::meter(ui, ui.available_width(), STAT_CARD_FILL);
                });
            }
        });

        ui.add_space(24.0);
        self.render_terminal(ui);
    }

    pub fn render_empty_state(&mut self, ui: &mut egui::Ui, route: Route) {
        let Some(page) = EmptyStatePage::for_route(route) else {
            return;
        };

        ui.label(egui::RichText::new(page.title).size(30.0).strong());
        ui.add_space(24.0);

        theme::card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.label(
                    egui::RichText::new(page.icon)
                        .size(48.0)
                        .color(theme::neon(0.2)),
                );
                ui.add_space(12.0);
                ui.label(egui::RichText::new(page.message).color(theme::neon(0.4)));
                ui.add_space(48.0);
            });
        });
    }

    /// Settings page; draws nothing until the stored values are loaded
    pub fn render_settings_view(&mut self, ui: &mut egui::Ui) {
        self.mount_settings();
        if !self.state.settings_form().is_mounted() {
            return;
        }

        let mut save_clicked = false;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.set_max_width(760.0);

                ui.label(egui::RichText::new(settings_copy::TITLE).size(30.0).strong());
                ui.label(egui::RichText::new(settings_copy::SUBTITLE).color(theme::neon(0.6)));
                ui.add_space(32.0);

                theme::card().show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    labelled_input(
                        ui,
                        icons::KEY,
                        "OpenAI API Key",
                        &mut self.state.settings_form_mut().openai_api_key,
                        settings_copy::API_KEY_HINT,
                        settings_copy::API_KEY_HELP,
                        true,
                    );
                    ui.add_space(24.0);
                    labelled_input(
                        ui,
                        icons::GITHUB_LOGO,
                        "GitHub Repository URL",
                        &mut self.state.settings_form_mut().github_repo_url,
                        settings_copy::REPO_HINT,
                        settings_copy::REPO_HELP,
                        false,
                    );

                    ui.add_space(24.0);
                    ui.separator();
                    ui.add_space(16.0);

                    let save = ui.add(
                        egui::Button::new(
                            egui::RichText::new(format!(
                                "{} {}",
                                icons::FLOPPY_DISK,
                                settings_copy::SAVE_BUTTON.to_uppercase()
                            ))
                            .strong()
                            .color(theme::BG),
                        )
                        .fill(NEON)
                        .corner_radius(8)
                        .min_size(egui::vec2(ui.available_width(), 44.0)),
                    );
                    save_clicked = save.clicked();
                });

                ui.add_space(24.0);

                egui::Frame::new()
                    .fill(theme::neon(0.05))
                    .stroke(egui::Stroke::new(1.0, theme::neon(0.2)))
                    .corner_radius(10)
                    .inner_margin(16)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_top(|ui| {
                            ui.label(egui::RichText::new(icons::SHIELD_WARNING).size(20.0));
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(settings_copy::NOTICE_TITLE.to_uppercase())
                                        .size(12.0)
                                        .strong(),
                                );
                                ui.label(
                                    egui::RichText::new(settings_copy::NOTICE_BODY)
                                        .size(12.0)
                                        .color(theme::neon(0.6)),
                                );
                            });
                        });
                    });
            });

        if save_clicked {
            self.save_settings();
        }
    }

    pub fn render_not_found(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(egui::RichText::new("404").size(48.0).strong());
            ui.label(
                egui::RichText::new(format!("No page at {}", self.state.navigator().current_path()))
                    .color(theme::neon(0.5)),
            );
        });
    }
}

fn labelled_input(
    ui: &mut egui::Ui,
    icon: &str,
    label: &str,
    value: &mut String,
    hint: &str,
    help: &str,
    masked: bool,
) {
    ui.label(
        egui::RichText::new(format!("{} {}", icon, label.to_uppercase()))
            .size(12.0)
            .strong()
            .color(theme::neon(0.8)),
    );
    ui.add_space(6.0);

    egui::Frame::new()
        .fill(theme::BG)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .password(masked)
                    .hint_text(hint)
                    .frame(false)
                    .text_color(WHITE)
                    .desired_width(f32::INFINITY),
            );
        });

    ui.add_space(4.0);
    ui.label(egui::RichText::new(help).size(10.0).color(theme::neon(0.4)));
}
