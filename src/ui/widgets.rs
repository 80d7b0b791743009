/// Admin analytics widgets: weekly usage bars and top concerns
use super::theme;
use eframe::egui;

/// Constants for widget styling
pub const WIDGET_MIN_WIDTH: f32 = 260.0;
pub const CHART_HEIGHT: f32 = 90.0;
pub const BAR_SPACING: f32 = 8.0;
pub const BAR_MIN_HEIGHT: f32 = 6.0;

/// Sample weekly sessions shown in the preview
pub const WEEKLY_SESSIONS: [u32; 5] = [12, 25, 8, 18, 30];

/// Top concerns with their share in percent
pub const TOP_CONCERNS: [(&str, u32); 3] = [
    ("Anxiety", 42),
    ("Sleep", 26),
    ("Academic stress", 18),
];

/// Bar height in pixels: twice the value, never thinner than BAR_MIN_HEIGHT
pub fn bar_height(value: u32) -> f32 {
    (value as f32 * 2.0).max(BAR_MIN_HEIGHT)
}

/// Renders a weekly bar chart with W1..Wn labels under the bars
pub fn draw_bar_chart(ui: &mut egui::Ui, title: &str, values: &[u32]) {
    theme::card().inner_margin(12.0).show(ui, |ui| {
        ui.set_min_width(WIDGET_MIN_WIDTH);
        ui.strong(title);
        ui.add_space(12.0);

        let label_height = 16.0;
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), CHART_HEIGHT + label_height),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);

        let count = values.len().max(1) as f32;
        let bar_width = (rect.width() - BAR_SPACING * (count - 1.0)) / count;
        let baseline = rect.max.y - label_height;

        for (i, value) in values.iter().enumerate() {
            let x = rect.min.x + i as f32 * (bar_width + BAR_SPACING);
            let height = bar_height(*value).min(CHART_HEIGHT);
            let bar = egui::Rect::from_min_max(
                egui::pos2(x, baseline - height),
                egui::pos2(x + bar_width, baseline),
            );

            // Градиент сверху вниз: accent → accent dark
            let mut mesh = egui::Mesh::default();
            mesh.colored_vertex(bar.left_top(), theme::ACCENT);
            mesh.colored_vertex(bar.right_top(), theme::ACCENT);
            mesh.colored_vertex(bar.left_bottom(), theme::ACCENT_DARK);
            mesh.colored_vertex(bar.right_bottom(), theme::ACCENT_DARK);
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(1, 2, 3);
            painter.add(egui::Shape::mesh(mesh));

            painter.text(
                egui::pos2(x, baseline + 2.0),
                egui::Align2::LEFT_TOP,
                format!("W{}", i + 1),
                egui::FontId::proportional(11.0),
                theme::MUTED,
            );
        }
    });
}

/// Renders a bullet list of concerns with percentages
pub fn draw_concerns(ui: &mut egui::Ui, title: &str, concerns: &[(&str, u32)]) {
    theme::card().inner_margin(12.0).show(ui, |ui| {
        ui.set_min_width(WIDGET_MIN_WIDTH);
        ui.strong(title);
        ui.add_space(12.0);
        for (name, share) in concerns {
            ui.label(theme::muted(format!("• {} — {}%", name, share)));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scales_and_clamps() {
        assert_eq!(bar_height(0), BAR_MIN_HEIGHT);
        assert_eq!(bar_height(2), BAR_MIN_HEIGHT);
        assert_eq!(bar_height(12), 24.0);
        assert_eq!(bar_height(30), 60.0);
    }
}
