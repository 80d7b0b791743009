/// Main application structure and lifecycle management
use super::booking::{self, BookingAction};
use super::sections::{self, NavAction, Section};
use super::state::{self as view_state, AppEvent, BookingState, ChatState, ResourceState, SearchTicket};
use super::{chat, resources, theme};
use crate::config::Config;
use crate::core::SupportAgent;
use crate::services::{BookingService, ResourceService};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct DigiPsychApp {
    pub config: Config,
    pub agent: Arc<SupportAgent>,
    pub resource_service: Arc<ResourceService>,
    pub booking_service: Arc<BookingService>,
    pub chat: ChatState,
    pub resources: ResourceState,
    pub booking: BookingState,
    pub event_sender: std_mpsc::Sender<AppEvent>,
    pub event_receiver: std_mpsc::Receiver<AppEvent>,
    pub logo_texture: Option<egui::TextureHandle>,
    pub logo_checked: bool,
    pub pending_scroll: Option<Section>,
    pub last_frame: Instant,
}

impl DigiPsychApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        // Стиль задаётся один раз при старте, а не в каждом кадре
        theme::apply(&cc.egui_ctx);

        let agent = Arc::new(SupportAgent::new(&config));
        let resource_service = Arc::new(ResourceService::new(config.latency.resources));
        let booking_service = Arc::new(BookingService::new(config.latency.booking));
        let (event_sender, event_receiver) = std_mpsc::channel();

        let mut app = Self {
            config,
            agent,
            resource_service,
            booking_service,
            chat: ChatState::default(),
            resources: ResourceState::default(),
            booking: BookingState::default(),
            event_sender,
            event_receiver,
            logo_texture: None,
            logo_checked: false,
            pending_scroll: None,
            last_frame: Instant::now(),
        };

        // Галерея загружается сразу, как при монтировании страницы
        app.search_resources(&cc.egui_ctx);
        app
    }

    pub fn load_logo(&mut self, ctx: &egui::Context) {
        if self.logo_checked {
            return;
        }
        self.logo_checked = true;

        let possible_paths = vec![
            PathBuf::from("assets/logo.png"),
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/logo.png"),
        ];

        let Some(image_path) = possible_paths.into_iter().find(|p| p.exists()) else {
            log::debug!("Logo not found, drawing the accent mark instead");
            return;
        };

        let image = match std::fs::read(&image_path)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| image::load_from_memory(&bytes).map_err(anyhow::Error::from))
        {
            Ok(image) => image,
            Err(e) => {
                log::warn!("⚠️ Could not load logo {}: {}", image_path.display(), e);
                return;
            }
        };

        let size = [image.width() as usize, image.height() as usize];
        let pixels = image.to_rgba8().into_raw();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
        self.logo_texture = Some(ctx.load_texture("digipsych_logo", color_image, egui::TextureOptions::LINEAR));
        log::info!("🖼 Logo loaded from {}", image_path.display());
    }

    pub fn send_message(&mut self, ctx: &egui::Context) {
        let Some(user_input) = self.chat.submit() else {
            return;
        };

        let agent = Arc::clone(&self.agent);
        let sender = self.event_sender.clone();
        let ctx_clone = ctx.clone();

        tokio::spawn(async move {
            let response = agent.get_response(&user_input).await;

            if let Err(e) = sender.send(AppEvent::BotReply(response)) {
                log::error!("Could not deliver chat reply: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    pub fn search_resources(&mut self, ctx: &egui::Context) {
        let SearchTicket { generation, query, language } = self.resources.begin_search();

        let service = Arc::clone(&self.resource_service);
        let sender = self.event_sender.clone();
        let ctx_clone = ctx.clone();

        tokio::spawn(async move {
            let items = service.get_resources(&query, language.code()).await;

            if let Err(e) = sender.send(AppEvent::Resources { generation, items }) {
                log::error!("Could not deliver resources: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    pub fn submit_booking(&mut self, ctx: &egui::Context) {
        let Some(request) = self.booking.begin_submit() else {
            return;
        };
        log::info!("📅 Booking request {} ({})", request.request_id, request.help.label());

        let service = Arc::clone(&self.booking_service);
        let sender = self.event_sender.clone();
        let ctx_clone = ctx.clone();

        tokio::spawn(async move {
            let receipt = service.book_appointment(&request).await;
            let event = AppEvent::Booked { request_id: request.request_id, receipt };

            if let Err(e) = sender.send(event) {
                log::error!("Could not deliver booking receipt: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    /// Обрабатывает результаты фоновых задач в UI потоке
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            view_state::apply_event(event, &mut self.chat, &mut self.resources, &mut self.booking);
        }
    }

    fn handle_nav(&mut self, action: NavAction) {
        match action {
            NavAction::BookAppointment => self.booking.open(),
            NavAction::ScrollTo(section) => self.pending_scroll = Some(section),
        }
    }

    /// Anchor for in-page navigation: scrolls here once when requested
    fn anchor(&mut self, ui: &mut egui::Ui, section: Section) {
        if self.pending_scroll == Some(section) {
            ui.scroll_to_cursor(Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
    }

    fn show_page(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        self.anchor(ui, Section::Home);
        ui.horizontal(|ui| {
            ui.set_max_width(theme::CONTENT_WIDTH);
            let start = ui
                .allocate_ui(egui::vec2(theme::CONTENT_WIDTH - chat::CHAT_WIDGET_WIDTH - 60.0, chat::CHAT_WIDGET_HEIGHT), |ui| {
                    sections::show_hero_text(ui)
                })
                .inner;
            if start {
                self.pending_scroll = Some(Section::Resources);
            }
            ui.add_space(24.0);
            if chat::show_chat_widget(ui, &mut self.chat) {
                self.send_message(ctx);
            }
        });

        ui.add_space(theme::SECTION_SPACING);
        sections::show_quote(ui);

        ui.add_space(theme::SECTION_SPACING);
        self.anchor(ui, Section::Features);
        sections::show_features(ui);

        ui.add_space(theme::SECTION_SPACING);
        self.anchor(ui, Section::Resources);
        if resources::show_resource_hub(ui, &mut self.resources) {
            self.search_resources(ctx);
        }

        ui.add_space(theme::SECTION_SPACING);
        self.anchor(ui, Section::Peer);
        sections::show_peer_forum(ui, &self.config.community_url);

        ui.add_space(theme::SECTION_SPACING);
        sections::show_admin_preview(ui);

        ui.add_space(theme::SECTION_SPACING);
        self.anchor(ui, Section::Contact);
        sections::show_footer(ui, &self.config.app_name, &self.config.community_url);
    }
}

impl eframe::App for DigiPsychApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.load_logo(ctx);
        self.process_events();

        if self.booking.tick(dt) {
            log::debug!("Booking modal closed after success");
        }
        // Таймер автозакрытия должен тикать без ввода пользователя
        if self.booking.visible && self.booking.status == view_state::BookingStatus::Success {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("navbar")
            .frame(egui::Frame::new().fill(theme::BG).inner_margin(egui::Margin::symmetric(50, 12)))
            .show(ctx, |ui| {
                if let Some(action) = sections::show_navbar(ui, &self.config.app_name, self.logo_texture.as_ref()) {
                    self.handle_nav(action);
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG).inner_margin(egui::Margin::symmetric(50, 24)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.show_page(ctx, ui));
            });

        match booking::show_booking_modal(ctx, &mut self.booking) {
            Some(BookingAction::Submit) => self.submit_booking(ctx),
            Some(BookingAction::Close) => self.booking.close(),
            None => {}
        }
    }
}
