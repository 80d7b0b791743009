use super::state::{LanguageFilter, ResourceState};
use super::theme;
use crate::core::catalog::{MediaType, Resource};
use eframe::egui;

pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_HEIGHT: f32 = 120.0;

/// Resource hub: search row plus result cards. Returns true when a search
/// should run.
pub fn show_resource_hub(ui: &mut egui::Ui, state: &mut ResourceState) -> bool {
    let mut search = false;

    ui.heading("Resource Hub");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.query)
                .hint_text("Search videos, audio, guides...")
                .desired_width(360.0),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            search = true;
        }

        egui::ComboBox::from_id_salt("resource_language")
            .selected_text(state.language.label())
            .show_ui(ui, |ui| {
                for lang in LanguageFilter::ALL {
                    ui.selectable_value(&mut state.language, lang, lang.label());
                }
            });

        if ui.add(theme::cta("Search")).clicked() {
            search = true;
        }
    });

    ui.add_space(12.0);

    if state.loading {
        ui.label(theme::muted("Loading..."));
    } else if state.items.is_empty() {
        ui.label(theme::muted("No resources match your search."));
    } else {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(24.0, 24.0);
            for resource in &state.items {
                draw_resource_card(ui, resource);
            }
        });
    }

    search
}

fn media_icon(media: MediaType) -> &'static str {
    match media {
        MediaType::Video => "🎬",
        MediaType::Audio => "🎧",
        MediaType::Article => "📄",
    }
}

fn draw_resource_card(ui: &mut egui::Ui, resource: &Resource) {
    theme::card().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.set_min_height(CARD_HEIGHT);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(media_icon(resource.media)).size(22.0));
            ui.add(egui::Label::new(egui::RichText::new(&resource.title).strong()).wrap());
        });
        ui.label(theme::muted(format!("{} • {}", resource.media.label(), resource.lang)).size(13.0));
        ui.add_space(6.0);

        // Встраивания нет: ролик открывается в браузере
        if let Some(url) = resource.watch_url() {
            ui.hyperlink_to("▶ Watch on YouTube", url);
        } else if let Some(image_url) = &resource.image_url {
            ui.hyperlink_to("🖼 Open guide", image_url);
        }
    });
}
