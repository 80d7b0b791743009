pub mod local;
pub mod remote;

pub use local::LocalAI;
pub use remote::{ChatbotClient, FALLBACK_REPLY};
