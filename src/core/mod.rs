pub mod agent;
pub mod appointment;
pub mod catalog;
pub mod chat;
pub mod responder;

pub use agent::SupportAgent;
pub use appointment::{AppointmentRequest, BookingReceipt, HelpType};
pub use catalog::{MediaType, Resource};
pub use chat::{ChatMessage, Sender};
