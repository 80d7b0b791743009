/// View-model state for the interactive sections.
///
/// Each struct owns the fields one section edits and exposes explicit
/// transitions; the egui code only reads fields and calls these methods.
use crate::core::appointment::{AppointmentRequest, BookingReceipt, HelpType};
use crate::core::catalog::Resource;
use crate::core::chat::ChatMessage;
use std::time::Duration;
use uuid::Uuid;

pub const CHAT_WELCOME: &str =
    "Hi, I'm the DigiPsych assistant. This is a safe space. How are you feeling today?";

/// Через сколько закрывать окно записи после успеха
pub const BOOKING_AUTO_CLOSE: Duration = Duration::from_millis(2500);

pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(CHAT_WELCOME)],
            input: String::new(),
            loading: false,
        }
    }
}

impl ChatState {
    /// idle → loading. Returns the text to send, or `None` when the input is
    /// blank or a reply is still pending.
    pub fn submit(&mut self) -> Option<String> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        self.loading = true;
        Some(text)
    }

    /// loading → idle with the bot reply appended
    pub fn receive(&mut self, reply: String) {
        self.messages.push(ChatMessage::bot(reply));
        self.loading = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    English,
    Hindi,
}

impl LanguageFilter {
    pub const ALL: [LanguageFilter; 3] = [LanguageFilter::All, LanguageFilter::English, LanguageFilter::Hindi];

    pub fn code(&self) -> Option<&'static str> {
        match self {
            LanguageFilter::All => None,
            LanguageFilter::English => Some("en"),
            LanguageFilter::Hindi => Some("hi"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageFilter::All => "All languages",
            LanguageFilter::English => "English",
            LanguageFilter::Hindi => "Hindi",
        }
    }
}

/// One search handed to the background task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
    pub language: LanguageFilter,
}

#[derive(Default)]
pub struct ResourceState {
    pub query: String,
    pub language: LanguageFilter,
    pub items: Vec<Resource>,
    pub loading: bool,
    /// Номер последнего запущенного поиска
    pub generation: u64,
}

impl ResourceState {
    /// idle → loading, returns the search to run
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        self.loading = true;
        SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
            language: self.language,
        }
    }

    /// loading → idle. Results of an older search are dropped, the flag
    /// stays on until the latest one arrives. Returns false when dropped.
    pub fn finish(&mut self, generation: u64, items: Vec<Resource>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Default)]
pub struct BookingForm {
    pub help: HelpType,
    pub date: String,
    pub notes: String,
}

#[derive(Default)]
pub struct BookingState {
    pub visible: bool,
    pub form: BookingForm,
    pub status: BookingStatus,
    /// Id отправленного запроса, ответ с другим id не принимается
    pub pending: Option<Uuid>,
    /// Сколько прошло с момента успешной отправки
    pub success_elapsed: Duration,
}

impl BookingState {
    /// Opens a fresh form
    pub fn open(&mut self) {
        *self = Self {
            visible: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.status == BookingStatus::Submitting
    }

    /// idle|error → submitting with a validated request, or → error when the
    /// form is incomplete. `None` while a submission is already running.
    pub fn begin_submit(&mut self) -> Option<AppointmentRequest> {
        if self.is_submitting() {
            return None;
        }

        match AppointmentRequest::from_form(self.form.help, &self.form.date, &self.form.notes) {
            Ok(request) => {
                self.status = BookingStatus::Submitting;
                self.pending = Some(request.request_id);
                Some(request)
            }
            Err(e) => {
                self.status = BookingStatus::Error(e.to_string());
                None
            }
        }
    }

    /// submitting → success|error. A receipt for any other request (e.g. one
    /// sent before the modal was closed and reopened) is ignored; returns false then.
    pub fn finish(&mut self, request_id: Uuid, receipt: BookingReceipt) -> bool {
        if self.pending != Some(request_id) || !self.is_submitting() {
            return false;
        }
        self.pending = None;
        self.status = if receipt.success {
            self.success_elapsed = Duration::ZERO;
            BookingStatus::Success
        } else {
            BookingStatus::Error("The request was not accepted".to_string())
        };
        true
    }

    /// Advances the success timer, closing the modal once it runs out.
    /// Returns true when the modal was closed by this tick.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.visible || self.status != BookingStatus::Success {
            return false;
        }
        self.success_elapsed += dt;
        if self.success_elapsed >= BOOKING_AUTO_CLOSE {
            self.close();
            return true;
        }
        false
    }
}

/// Results sent back to the UI thread from background tasks
#[derive(Debug)]
pub enum AppEvent {
    BotReply(String),
    Resources { generation: u64, items: Vec<Resource> },
    Booked { request_id: Uuid, receipt: BookingReceipt },
}

/// Routes one background result into the view model it belongs to
pub fn apply_event(
    event: AppEvent,
    chat: &mut ChatState,
    resources: &mut ResourceState,
    booking: &mut BookingState,
) {
    match event {
        AppEvent::BotReply(reply) => chat.receive(reply),
        AppEvent::Resources { generation, items } => {
            if !resources.finish(generation, items) {
                log::debug!("Dropped results of superseded search #{}", generation);
            }
        }
        AppEvent::Booked { request_id, receipt } => {
            if !booking.finish(request_id, receipt) {
                log::debug!("Dropped stale booking receipt {}", request_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::sample_catalog;
    use crate::core::chat::Sender;

    #[test]
    fn test_chat_starts_with_welcome() {
        let chat = ChatState::default();
        assert_eq!(chat.messages, vec![ChatMessage::bot(CHAT_WELCOME)]);
        assert!(!chat.loading);
    }

    #[test]
    fn test_chat_submit_and_receive() {
        let mut chat = ChatState::default();
        chat.input = "hello".to_string();

        assert_eq!(chat.submit().as_deref(), Some("hello"));
        assert!(chat.loading);
        assert!(chat.input.is_empty());
        assert_eq!(chat.messages.last(), Some(&ChatMessage::user("hello")));

        chat.receive("Hi!".to_string());
        assert!(!chat.loading);
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[2].sender, Sender::Bot);
    }

    #[test]
    fn test_chat_blank_input_ignored() {
        let mut chat = ChatState::default();
        chat.input = "   ".to_string();
        assert!(chat.submit().is_none());
        assert!(!chat.loading);
        assert_eq!(chat.messages.len(), 1);
    }

    #[test]
    fn test_chat_double_submit_ignored() {
        let mut chat = ChatState::default();
        chat.input = "first".to_string();
        assert!(chat.submit().is_some());

        chat.input = "second".to_string();
        assert!(chat.submit().is_none());
        assert_eq!(chat.input, "second");
        assert_eq!(chat.messages.len(), 2);
    }

    #[test]
    fn test_resource_search_transitions() {
        let mut state = ResourceState::default();
        state.query = "sleep".to_string();
        state.language = LanguageFilter::English;

        let ticket = state.begin_search();
        assert!(state.loading);
        assert_eq!(ticket.query, "sleep");
        assert_eq!(ticket.language.code(), Some("en"));

        assert!(state.finish(ticket.generation, Vec::new()));
        assert!(!state.loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_older_search_does_not_clear_loading() {
        let catalog = sample_catalog();
        let mut state = ResourceState::default();
        state.query = "exam".to_string();
        let first = state.begin_search();
        state.query = "sleep".to_string();
        let second = state.begin_search();

        assert!(!state.finish(first.generation, catalog.clone()));
        assert!(state.loading);
        assert!(state.items.is_empty());

        assert!(state.finish(second.generation, vec![catalog[6].clone()]));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "Sleep Guide");
    }

    #[test]
    fn test_language_filter_codes() {
        assert_eq!(LanguageFilter::All.code(), None);
        assert_eq!(LanguageFilter::Hindi.code(), Some("hi"));
    }

    #[test]
    fn test_booking_open_resets_form() {
        let mut booking = BookingState::default();
        booking.form.date = "2025-01-01".to_string();
        booking.status = BookingStatus::Error("x".to_string());

        booking.open();
        assert!(booking.visible);
        assert!(booking.form.date.is_empty());
        assert_eq!(booking.status, BookingStatus::Idle);
    }

    #[test]
    fn test_booking_validation_error() {
        let mut booking = BookingState::default();
        booking.open();
        assert!(booking.begin_submit().is_none());
        assert!(matches!(booking.status, BookingStatus::Error(_)));
    }

    #[test]
    fn test_booking_success_then_auto_close() {
        let mut booking = BookingState::default();
        booking.open();
        booking.form.help = HelpType::PeerVolunteer;
        booking.form.date = "2025-04-10".to_string();

        let request = booking.begin_submit().expect("valid form");
        assert_eq!(request.help, HelpType::PeerVolunteer);
        assert_eq!(booking.pending, Some(request.request_id));
        assert!(booking.is_submitting());
        assert!(booking.begin_submit().is_none());

        assert!(booking.finish(request.request_id, BookingReceipt { success: true }));
        assert!(booking.pending.is_none());
        assert_eq!(booking.status, BookingStatus::Success);

        assert!(!booking.tick(Duration::from_millis(2000)));
        assert!(booking.visible);
        assert!(booking.tick(Duration::from_millis(600)));
        assert!(!booking.visible);
    }

    #[test]
    fn test_booking_rejected_receipt() {
        let mut booking = BookingState::default();
        booking.open();
        booking.form.date = "2025-04-10".to_string();
        let request = booking.begin_submit().expect("valid form");
        assert!(booking.finish(request.request_id, BookingReceipt { success: false }));
        assert!(matches!(booking.status, BookingStatus::Error(_)));
        assert!(!booking.tick(Duration::from_secs(10)));
        assert!(booking.visible);
    }

    #[test]
    fn test_receipt_from_closed_form_ignored_after_reopen() {
        let mut booking = BookingState::default();
        booking.open();
        booking.form.date = "2025-04-10".to_string();
        let request = booking.begin_submit().expect("valid form");

        // Закрыли окно до ответа и открыли заново
        booking.close();
        booking.open();
        assert!(!booking.finish(request.request_id, BookingReceipt { success: true }));
        assert_eq!(booking.status, BookingStatus::Idle);
        assert!(booking.visible);
        assert!(!booking.tick(Duration::from_secs(5)));
        assert!(booking.visible);
    }

    #[test]
    fn test_receipt_with_unknown_id_ignored() {
        let mut booking = BookingState::default();
        booking.open();
        booking.form.date = "2025-04-10".to_string();
        booking.begin_submit().expect("valid form");

        assert!(!booking.finish(Uuid::new_v4(), BookingReceipt { success: true }));
        assert!(booking.is_submitting());
    }

    #[test]
    fn test_apply_event_routes_to_view_models() {
        let mut chat = ChatState::default();
        let mut resources = ResourceState::default();
        let mut booking = BookingState::default();

        chat.input = "hello".to_string();
        chat.submit();
        apply_event(AppEvent::BotReply("Hi!".to_string()), &mut chat, &mut resources, &mut booking);
        assert!(!chat.loading);
        assert_eq!(chat.messages.last(), Some(&ChatMessage::bot("Hi!")));

        let ticket = resources.begin_search();
        let items = sample_catalog();
        apply_event(
            AppEvent::Resources { generation: ticket.generation, items: items.clone() },
            &mut chat,
            &mut resources,
            &mut booking,
        );
        assert!(!resources.loading);
        assert_eq!(resources.items, items);

        booking.open();
        booking.form.date = "2025-04-10".to_string();
        let request = booking.begin_submit().expect("valid form");
        apply_event(
            AppEvent::Booked { request_id: request.request_id, receipt: BookingReceipt { success: true } },
            &mut chat,
            &mut resources,
            &mut booking,
        );
        assert_eq!(booking.status, BookingStatus::Success);
        assert_eq!(chat.messages.len(), 3);
    }

    #[test]
    fn test_apply_event_drops_stale_results() {
        let mut chat = ChatState::default();
        let mut resources = ResourceState::default();
        let mut booking = BookingState::default();

        let old = resources.begin_search();
        resources.begin_search();
        apply_event(
            AppEvent::Resources { generation: old.generation, items: sample_catalog() },
            &mut chat,
            &mut resources,
            &mut booking,
        );
        assert!(resources.loading);
        assert!(resources.items.is_empty());

        booking.open();
        apply_event(
            AppEvent::Booked { request_id: Uuid::new_v4(), receipt: BookingReceipt { success: true } },
            &mut chat,
            &mut resources,
            &mut booking,
        );
        assert_eq!(booking.status, BookingStatus::Idle);
        assert_eq!(chat.messages.len(), 1);
    }
}
