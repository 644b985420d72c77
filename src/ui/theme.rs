// CRT-terminal look for egui
//
// Neon green on black, monospace everywhere, hairline olive borders.

use bug_exorcist::pages::Tone;
use egui::Color32;

pub const NEON: Color32 = Color32::from_rgb(56, 255, 20); // #38ff14
pub const BORDER: Color32 = Color32::from_rgb(42, 58, 39); // #2a3a27
pub const BG: Color32 = Color32::BLACK;
pub const PANEL_BG: Color32 = Color32::from_rgb(5, 8, 4);
pub const CARD_BG: Color32 = Color32::from_rgb(8, 12, 7);
pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);

/// Neon green at a fraction of full opacity (like `#38ff14/40`)
pub fn neon(alpha: f32) -> Color32 {
    NEON.gamma_multiply(alpha)
}

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Red => Color32::from_rgb(239, 68, 68),
        Tone::Green => Color32::from_rgb(34, 197, 94),
        Tone::Yellow => Color32::from_rgb(234, 179, 8),
        Tone::Blue => Color32::from_rgb(59, 130, 246),
    }
}

/// Tint for a terminal channel such as `SYSTEM` or `UPLINK`
pub fn channel_color(channel: &str) -> Color32 {
    match channel {
        "SYSTEM" => neon(0.9),
        "AUTH" => Color32::from_rgb(234, 179, 8),
        "UPLINK" => Color32::from_rgb(59, 130, 246),
        "PROCESS" => Color32::from_rgb(168, 85, 247),
        _ => neon(0.8),
    }
}

/// Install fonts: egui defaults plus Phosphor icons, reachable from both families
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    // The whole UI is monospace, so it needs the icon glyphs as a fallback too
    let proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    let monospace = fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default();
    for font in proportional {
        if !monospace.contains(&font) {
            monospace.push(font);
        }
    }

    ctx.set_fonts(fonts);
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Monospace),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Monospace),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Monospace),
        ),
        (
            egui::TextStyle::Small,
            egui::FontId::new(10.0, egui::FontFamily::Monospace),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::new(14.0, egui::FontFamily::Monospace),
        ),
    ]
    .into();

    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(NEON);
    visuals.panel_fill = BG;
    visuals.window_fill = PANEL_BG;
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.extreme_bg_color = PANEL_BG;
    visuals.faint_bg_color = CARD_BG;
    visuals.widgets.noninteractive.bg_fill = BG;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.bg_fill = BG;
    visuals.widgets.inactive.weak_bg_fill = BG;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_fill = neon(0.05);
    visuals.widgets.hovered.weak_bg_fill = neon(0.05);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, neon(0.5));
    visuals.widgets.active.bg_fill = neon(0.2);
    visuals.widgets.active.weak_bg_fill = neon(0.2);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, NEON);
    visuals.selection.bg_fill = neon(0.25);
    visuals.selection.stroke = egui::Stroke::new(1.0, NEON);
    visuals.text_cursor.stroke = egui::Stroke::new(2.0, NEON);

    style.visuals = visuals;
    ctx.set_style(style);
}

/// Bordered dark card used by stat tiles and form sections
pub fn card() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_BG)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(10)
        .inner_margin(16)
}

/// Small uppercase label text (`text-[10px] uppercase tracking-widest`)
pub fn caption(text: &str, alpha: f32) -> egui::RichText {
    egui::RichText::new(text.to_uppercase())
        .size(10.0)
        .strong()
        .color(neon(alpha))
}

/// Horizontal meter: track plus a filled share of `fraction`
pub fn meter(ui: &mut egui::Ui, width: f32, fraction: f32) {
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, 4.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, neon(0.1));

    let mut filled = rect;
    filled.set_width(rect.width() * fraction.clamp(0.0, 1.0));
    ui.painter().rect_filled(filled, 2.0, NEON);
}
