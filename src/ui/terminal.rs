// Dashboard terminal panel

use crate::ui::theme::{self, BORDER, NEON, WHITE};
use bug_exorcist::terminal::{
    LogLine, FOOTER_ENCODING, FOOTER_LEFT, FOOTER_LIVE, PROMPT, PROMPT_COMMAND, SESSION_TITLE,
    TERMINAL_STATS,
};
use eframe::egui;
use std::time::Duration;

const FOOTER_HEIGHT: f32 = 28.0;
const PROMPT_HEIGHT: f32 = 28.0;
const BLINK_PERIOD: f64 = 1.0;

impl crate::ExorcistApp {
    pub fn render_terminal(&mut self, ui: &mut egui::Ui) {
        let scroll_to_bottom = self.terminal.take_scroll_request();

        theme::card()
            .fill(theme::BG)
            .inner_margin(0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                terminal_title_bar(ui);
                terminal_stats_bar(ui);

                let log_height =
                    (ui.available_height() - FOOTER_HEIGHT - PROMPT_HEIGHT - 24.0).max(120.0);

                egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("terminal_logs")
                            .max_height(log_height)
                            .stick_to_bottom(true)
                            .auto_shrink([false; 2])
                            .show(ui, |ui| {
                                for line in self.terminal.current_logs() {
                                    log_line(ui, line);
                                }
                                prompt_line(ui);

                                if scroll_to_bottom {
                                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                                }
                            });
                    });

                terminal_footer(ui);
            });
    }
}

fn terminal_title_bar(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                // Window "traffic light" dots
                for color in [
                    egui::Color32::from_rgb(239, 68, 68),
                    egui::Color32::from_rgb(234, 179, 8),
                    egui::Color32::from_rgb(34, 197, 94),
                ] {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 5.0, color.gamma_multiply(0.6));
                }
                ui.add_space(8.0);
                ui.label(theme::caption(SESSION_TITLE, 0.6));
            });
        });
}

fn terminal_stats_bar(ui: &mut egui::Ui) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, BORDER))
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(TERMINAL_STATS.len(), |columns| {
                for (ui, stat) in columns.iter_mut().zip(TERMINAL_STATS.iter()) {
                    ui.label(theme::caption(stat.label, 0.5));
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(stat.value).size(18.0).strong());
                        match stat.meter {
                            Some(fraction) => theme::meter(ui, 60.0, fraction),
                            None => {
                                ui.label(
                                    egui::RichText::new(stat.icon).color(theme::neon(0.5)),
                                );
                            }
                        }
                    });
                }
            });
        });
}

fn log_line(ui: &mut egui::Ui, line: &str) {
    let parsed = LogLine::parse(line);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        if let Some(timestamp) = parsed.timestamp {
            ui.label(
                egui::RichText::new(format!("[{}]", timestamp))
                    .size(13.0)
                    .color(theme::neon(0.4)),
            );
        }
        if let Some(channel) = parsed.channel {
            ui.label(
                egui::RichText::new(format!("{} ::", channel))
                    .size(13.0)
                    .strong()
                    .color(theme::channel_color(channel)),
            );
        }
        ui.label(egui::RichText::new(parsed.message).size(13.0));
    });
}

fn prompt_line(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        ui.label(egui::RichText::new(PROMPT).size(13.0).strong());
        ui.label(egui::RichText::new(PROMPT_COMMAND).size(13.0).color(WHITE));

        let time = ui.input(|i| i.time);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 16.0), egui::Sense::hover());
        if time % BLINK_PERIOD < BLINK_PERIOD / 2.0 {
            ui.painter().rect_filled(rect, 0.0, NEON);
        }
        ui.ctx()
            .request_repaint_after(Duration::from_secs_f64(BLINK_PERIOD / 2.0));
    });
}

fn terminal_footer(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .inner_margin(egui::Margin::symmetric(16, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_height(FOOTER_HEIGHT - 12.0);
            ui.horizontal_centered(|ui| {
                for item in FOOTER_LEFT {
                    ui.label(theme::caption(item, 0.4));
                    ui.add_space(12.0);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(theme::caption(FOOTER_ENCODING, 0.4));
                    ui.add_space(12.0);
                    ui.label(theme::caption(FOOTER_LIVE, 0.8));
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 3.0, NEON);
                });
            });
        });
}
