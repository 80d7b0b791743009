/// Hero chat widget rendering
use super::state::ChatState;
use super::theme;
use eframe::egui;

/// Constants for chat widget styling
pub const CHAT_WIDGET_WIDTH: f32 = 420.0;
pub const CHAT_WIDGET_HEIGHT: f32 = 450.0;
pub const BUBBLE_MAX_WIDTH: f32 = CHAT_WIDGET_WIDTH * 0.8;
pub const INPUT_HEIGHT: f32 = 52.0;

const HEADER: &str = "💬 Talk to our AI assistant";
const TYPING: &str = "Assistant is typing...";
const PLACEHOLDER: &str = "Type how you feel...";

/// Renders the chat widget and returns true when the user asked to send
///
/// # Arguments
/// * `ui` - Parent ui, the widget takes a fixed size inside it
/// * `chat` - Chat view model; only `input` is edited here
pub fn show_chat_widget(ui: &mut egui::Ui, chat: &mut ChatState) -> bool {
    let mut send = false;

    theme::card()
        .inner_margin(0.0)
        .show(ui, |ui| {
            ui.set_width(CHAT_WIDGET_WIDTH);
            ui.set_height(CHAT_WIDGET_HEIGHT);

            // Заголовок
            egui::Frame::new()
                .fill(egui::Color32::from_black_alpha(50))
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| ui.strong(HEADER));
                });

            let messages_height = ui.available_height() - INPUT_HEIGHT;
            egui::ScrollArea::vertical()
                .id_salt("hero_chat_messages")
                .max_height(messages_height)
                .min_scrolled_height(messages_height)
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    for msg in &chat.messages {
                        draw_bubble(ui, &msg.text, msg.is_user());
                    }
                    if chat.loading {
                        ui.horizontal(|ui| {
                            ui.add_space(12.0);
                            ui.label(theme::muted(TYPING).italics());
                        });
                    }
                    ui.add_space(8.0);
                });

            ui.separator();
            send = draw_input_row(ui, chat);
        });

    send
}

fn draw_bubble(ui: &mut egui::Ui, text: &str, is_user: bool) {
    let (fill, text_color, layout) = if is_user {
        (theme::ACCENT, theme::BG, egui::Layout::right_to_left(egui::Align::Min))
    } else {
        (theme::BG, theme::MUTED, egui::Layout::left_to_right(egui::Align::Min))
    };

    // Хвостик пузыря: острый угол со стороны отправителя
    let corner_radius = if is_user {
        egui::CornerRadius { nw: 18, ne: 18, sw: 18, se: 4 }
    } else {
        egui::CornerRadius { nw: 18, ne: 18, sw: 4, se: 18 }
    };

    ui.with_layout(layout, |ui| {
        ui.add_space(12.0);
        egui::Frame::new()
            .fill(fill)
            .corner_radius(corner_radius)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(BUBBLE_MAX_WIDTH);
                ui.add(egui::Label::new(egui::RichText::new(text).color(text_color).size(14.0)).wrap());
            });
    });
}

fn draw_input_row(ui: &mut egui::Ui, chat: &mut ChatState) -> bool {
    let mut send = false;

    ui.horizontal(|ui| {
        ui.add_space(10.0);
        ui.add_enabled_ui(!chat.loading, |ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut chat.input)
                    .hint_text(PLACEHOLDER)
                    .desired_width(CHAT_WIDGET_WIDTH - 110.0),
            );
            // Отправка по Enter
            if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send = true;
                input.request_focus();
            }

            if ui.add(theme::cta("Send")).clicked() {
                send = true;
            }
        });
    });

    send
}
