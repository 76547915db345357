//! Domain services for the wedding sites backend.
//!
//! Services contain pure business logic that operates on domain models.

pub mod access;
pub mod chatbot;
pub mod sections;

pub use access::{decide, AccessContext, AccessDecision, ReasonCode};

pub use chatbot::{respond, ChatContext, ChatIntent, ChatReply};

pub use sections::SectionVisibility;
