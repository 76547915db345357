//! HTTP route handlers.

pub mod chat;
pub mod events;
pub mod guests;
pub mod health;
pub mod sites;
