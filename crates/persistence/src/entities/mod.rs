//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod event;
pub mod guest;
pub mod website;

pub use event::WeddingEventEntity;
pub use guest::GuestEntity;
pub use website::{WebsiteStatusDb, WebsiteWithWeddingEntity};
