//! Repository implementations for database operations.

pub mod event;
pub mod guest;
pub mod website;

pub use event::EventRepository;
pub use guest::GuestRepository;
pub use website::WebsiteRepository;
