/// Appointment booking modal
use super::state::{BookingState, BookingStatus};
use super::theme;
use crate::core::appointment::HelpType;
use eframe::egui;

pub const MODAL_WIDTH: f32 = 480.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Submit,
    Close,
}

/// Draws the modal when it is visible. Clicking outside, Escape or the close
/// button all ask to close.
pub fn show_booking_modal(ctx: &egui::Context, booking: &mut BookingState) -> Option<BookingAction> {
    if !booking.visible {
        return None;
    }

    let mut action = None;

    let modal = egui::Modal::new(egui::Id::new("booking_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.add(egui::Button::new(theme::muted("✖").size(20.0)).frame(false)).clicked() {
                action = Some(BookingAction::Close);
            }
        });

        if booking.status == BookingStatus::Success {
            show_success(ui);
        } else if show_form(ui, booking) {
            action = Some(BookingAction::Submit);
        }
    });

    if modal.should_close() && action.is_none() {
        action = Some(BookingAction::Close);
    }

    action
}

fn show_success(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(egui::RichText::new("✅").size(28.0));
        ui.label(egui::RichText::new("Request Sent!").color(theme::ACCENT).size(22.0).strong());
        ui.label(theme::muted("We've received your request. You will be contacted shortly."));
        ui.add_space(20.0);
    });
}

/// Returns true when the form was submitted
fn show_form(ui: &mut egui::Ui, booking: &mut BookingState) -> bool {
    let mut submit = false;
    let submitting = booking.is_submitting();

    ui.label(egui::RichText::new("Book a Confidential Session").size(24.0).strong());
    ui.label(theme::muted(
        "Your request is sent anonymously. A counsellor will reach out with available slots.",
    ).size(14.0));
    ui.add_space(16.0);

    ui.add_enabled_ui(!submitting, |ui| {
        ui.label(theme::muted("Type of Help"));
        egui::ComboBox::from_id_salt("booking_help_type")
            .width(MODAL_WIDTH)
            .selected_text(booking.form.help.label())
            .show_ui(ui, |ui| {
                for help in HelpType::ALL {
                    ui.selectable_value(&mut booking.form.help, help, help.label());
                }
            });
        ui.add_space(12.0);

        ui.label(theme::muted("Preferred Date"));
        ui.add(
            egui::TextEdit::singleline(&mut booking.form.date)
                .hint_text("YYYY-MM-DD")
                .desired_width(MODAL_WIDTH),
        );
        ui.add_space(12.0);

        ui.label(theme::muted("Reason for booking (optional)"));
        ui.add(
            egui::TextEdit::multiline(&mut booking.form.notes)
                .hint_text("e.g., Feeling stressed about exams...")
                .desired_rows(3)
                .desired_width(MODAL_WIDTH),
        );
        ui.add_space(16.0);

        let label = if submitting { "Submitting..." } else { "Submit Request" };
        if ui.add_sized([MODAL_WIDTH, 40.0], theme::cta(label)).clicked() {
            submit = true;
        }
    });

    if let BookingStatus::Error(reason) = &booking.status {
        ui.add_space(10.0);
        ui.colored_label(theme::ERROR, "Something went wrong. Please try again.");
        ui.colored_label(theme::ERROR, reason);
    }

    submit
}
