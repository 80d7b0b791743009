pub mod booking;
pub mod resources;

pub use booking::BookingService;
pub use resources::ResourceService;
