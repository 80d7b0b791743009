/// Static sections of the page: navbar, hero text, quote, features, forum,
/// admin preview and footer
use super::{theme, widgets};
use eframe::egui;

/// Действие из навигации, которое обрабатывает приложение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ScrollTo(Section),
    BookAppointment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Features,
    Resources,
    Peer,
    Contact,
}

impl Section {
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::Features,
        Section::Resources,
        Section::Peer,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::Resources => "Resources",
            Section::Peer => "Peer Support",
            Section::Contact => "Contact",
        }
    }
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        icon: "🤖",
        title: "AI-guided First Aid",
        description: "An always-on chatbot offers coping strategies and points you to the right help.",
    },
    Feature {
        icon: "📅",
        title: "Confidential Booking",
        description: "Book an anonymous session with a campus counsellor or helpline.",
    },
    Feature {
        icon: "📚",
        title: "Resource Hub",
        description: "Videos, relaxation audio and wellness guides in your language.",
    },
    Feature {
        icon: "👥",
        title: "Peer Support Forum",
        description: "A moderated space to share and listen, guided by trained volunteers.",
    },
    Feature {
        icon: "📈",
        title: "Admin Dashboard",
        description: "Anonymous analytics so institutions can spot trends and plan support.",
    },
];

pub struct ForumThread {
    pub user: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

pub const THREADS: [ForumThread; 2] = [
    ForumThread {
        user: "Anonymous",
        title: "Coping with exam anxiety",
        message: "Looking for quick breathing exercises.",
    },
    ForumThread {
        user: "Volunteer",
        title: "Need a listening ear",
        message: "I can volunteer 2 hours weekly to moderate.",
    },
];

pub const QUOTE: &str =
    "The first step towards getting somewhere is to decide you're not going to stay where you are.";
pub const QUOTE_AUTHOR: &str = "J.P. Morgan";

/// Top bar with logo, section links and the booking button
pub fn show_navbar(
    ui: &mut egui::Ui,
    app_name: &str,
    logo: Option<&egui::TextureHandle>,
) -> Option<NavAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let logo_size = egui::vec2(34.0, 34.0);
        match logo {
            Some(texture) => {
                ui.add(egui::Image::new((texture.id(), logo_size)).corner_radius(6.0));
            }
            None => {
                // Без картинки рисуем цветной квадрат, как в вебе
                let (rect, _) = ui.allocate_exact_size(logo_size, egui::Sense::hover());
                ui.painter().rect_filled(rect, 6.0, theme::ACCENT);
            }
        }
        ui.label(egui::RichText::new(app_name).strong().size(18.0));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(theme::cta("Book Appointment")).clicked() {
                action = Some(NavAction::BookAppointment);
            }
            for section in Section::NAV.iter().rev() {
                if ui.add(egui::Button::new(egui::RichText::new(section.label()).strong()).frame(false)).clicked() {
                    action = Some(NavAction::ScrollTo(*section));
                }
            }
        });
    });

    action
}

/// Hero copy on the left of the chat widget. Returns true on "Start now".
pub fn show_hero_text(ui: &mut egui::Ui) -> bool {
    let mut start = false;

    ui.vertical(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("Your mind matters. Support is one message away.").size(40.0).strong());
        ui.add_space(12.0);
        ui.label(theme::muted(
            "Free, confidential and stigma-free mental health support for students: \
             talk to our assistant, explore calming resources or book a counsellor anonymously.",
        ));
        ui.add_space(18.0);
        ui.horizontal(|ui| {
            if ui.add(theme::cta("Start now")).clicked() {
                start = true;
            }
            ui.add(egui::Button::new(theme::muted("Learn more")).fill(egui::Color32::TRANSPARENT));
        });
        ui.add_space(18.0);
        ui.small(theme::muted("Not a crisis service. In an emergency call Tele-MANAS 14416."));
    });

    start
}

pub fn show_quote(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(egui::Color32::from_black_alpha(60))
        .corner_radius(8.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(theme::muted(format!("\"{}\"", QUOTE)).italics().size(22.0));
                ui.add_space(12.0);
                ui.label(egui::RichText::new(format!("- {}", QUOTE_AUTHOR)).strong().size(16.0));
            });
        });
}

pub fn show_features(ui: &mut egui::Ui) {
    ui.heading("Core Features");
    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(18.0, 18.0);
        for feature in &FEATURES {
            theme::card().show(ui, |ui| {
                ui.set_width(180.0);
                ui.set_min_height(150.0);
                ui.label(egui::RichText::new(feature.icon).size(20.0));
                ui.label(egui::RichText::new(feature.title).strong());
                ui.add(egui::Label::new(theme::muted(feature.description).size(14.0)).wrap());
            });
        }
    });
}

pub fn show_peer_forum(ui: &mut egui::Ui, community_url: &str) {
    ui.heading("Peer Support Forum");
    ui.label(theme::muted("Moderated by trained student volunteers. Share, listen and heal together."));
    ui.add_space(12.0);

    for thread in &THREADS {
        theme::card().inner_margin(12.0).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(thread.title);
            ui.label(theme::muted(thread.message).size(13.0));
            ui.small(theme::muted(format!("Posted by {}", thread.user)));
        });
        ui.add_space(10.0);
    }

    ui.hyperlink_to(egui::RichText::new("Join the community").color(theme::ACCENT).strong(), community_url);
}

pub fn show_admin_preview(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(egui::Color32::from_white_alpha(5))
        .corner_radius(12.0)
        .inner_margin(18.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Admin Analytics (Preview)");
            ui.label(theme::muted("Anonymous, aggregated insights for campus wellness teams."));
            ui.add_space(12.0);
            ui.horizontal_wrapped(|ui| {
                widgets::draw_bar_chart(ui, "Weekly sessions", &widgets::WEEKLY_SESSIONS);
                widgets::draw_concerns(ui, "Top concerns", &widgets::TOP_CONCERNS);
            });
        });
}

pub fn show_footer(ui: &mut egui::Ui, app_name: &str, community_url: &str) {
    ui.separator();
    ui.add_space(24.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(48.0, 18.0);

        footer_column(ui, app_name, |ui| {
            ui.label(theme::muted("A digital psychological intervention platform for students in higher education.").size(14.0));
        });
        footer_column(ui, "Quick Links", |ui| {
            ui.label(theme::muted("Resources").size(14.0));
            ui.hyperlink_to(theme::muted("Peer Support").size(14.0), community_url);
            ui.label(theme::muted("Book Appointment").size(14.0));
        });
        footer_column(ui, "Contact", |ui| {
            ui.label(theme::muted("Digipsych@college.edu").size(14.0));
            ui.label(theme::muted("+91 98765 43210").size(14.0));
        });
        footer_column(ui, "J&K Emergency Helplines", |ui| {
            ui.label(theme::muted("Tele-MANAS: 14416").size(14.0));
            ui.label(theme::muted("(Mental Health Support)").size(14.0));
            ui.label(theme::muted("Student's NGO: 18001802070").size(14.0));
        });
    });
    ui.add_space(24.0);
}

fn footer_column(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.vertical(|ui| {
        ui.set_width(200.0);
        ui.strong(title);
        ui.add_space(8.0);
        body(ui);
    });
}
