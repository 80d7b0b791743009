/// Palette and global style, applied once when the app is created
use eframe::egui;
use egui::Color32;

pub const BG: Color32 = Color32::from_rgb(0x07, 0x12, 0x33);
pub const CARD: Color32 = Color32::from_rgb(0x0f, 0x27, 0x48);
pub const MUTED: Color32 = Color32::from_rgb(0xbc, 0xd0, 0xff);
pub const ACCENT: Color32 = Color32::from_rgb(0x20, 0xc9, 0x97);
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x0b, 0xbf, 0x86);
pub const TEXT: Color32 = Color32::from_rgb(0xea, 0xf2, 0xff);
pub const ERROR: Color32 = Color32::from_rgb(0xff, 0x8a, 0x8a);
pub const BORDER: Color32 = Color32::from_rgba_premultiplied(12, 12, 12, 12);

pub const CONTENT_WIDTH: f32 = 1100.0;
pub const SECTION_SPACING: f32 = 36.0;

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let visuals = &mut style.visuals;
    *visuals = egui::Visuals::dark();
    visuals.panel_fill = BG;
    visuals.window_fill = CARD;
    visuals.extreme_bg_color = BG;
    visuals.faint_bg_color = CARD;
    visuals.override_text_color = Some(TEXT);
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.active.corner_radius = egui::CornerRadius::same(8);
    visuals.window_corner_radius = egui::CornerRadius::same(16);

    style.spacing.item_spacing = egui::vec2(12.0, 10.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);

    // Крупнее стандартного: сайт рассчитан на чтение
    style.text_styles.insert(egui::TextStyle::Heading, egui::FontId::proportional(28.0));
    style.text_styles.insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
    style.text_styles.insert(egui::TextStyle::Button, egui::FontId::proportional(15.0));

    ctx.set_style(style);
    log::debug!("🎨 Theme applied");
}

/// Card-like frame used by most sections
pub fn card() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD)
        .corner_radius(12.0)
        .inner_margin(18.0)
        .stroke(egui::Stroke::new(1.0, BORDER))
}

/// Filled accent button, the site's call to action
pub fn cta(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(BG).strong())
        .fill(ACCENT)
        .corner_radius(8.0)
}

pub fn muted(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text.into()).color(MUTED)
}
