pub mod app;
pub mod booking;
pub mod chat;
pub mod resources;
pub mod sections;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::DigiPsychApp;
