//! Keyword-matching chatbot responder.
//!
//! A shallow, single-pass, stateless matcher over already-fetched rows: the
//! guest's message is lowercased and checked against fixed keyword sets in
//! priority order; the reply is formatted from the wedding context. No NLP,
//! no external calls, no memory between messages.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::event::WeddingEvent;

/// Wedding context the responder formats replies from.
#[derive(Debug, Clone)]
pub struct ChatContext<'a> {
    pub partner_names: &'a str,
    pub wedding_date: NaiveDate,
    pub venue_name: Option<&'a str>,
    pub venue_address: Option<&'a str>,
    pub events: &'a [WeddingEvent],
}

/// Intent matched from the guest's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    Venue,
    Schedule,
    DressCode,
    Rsvp,
    Registry,
    Travel,
    Fallback,
}

/// A formatted chatbot reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ChatReply {
    pub intent: ChatIntent,
    pub reply: String,
}

/// Keyword sets per intent, checked in order; first match wins.
const INTENTS: &[(ChatIntent, &[&str])] = &[
    (ChatIntent::Venue, &["venue", "where", "location", "address"]),
    (
        ChatIntent::Schedule,
        &["when", "time", "schedule", "date", "start"],
    ),
    (ChatIntent::DressCode, &["dress", "attire", "wear", "outfit"]),
    (ChatIntent::Rsvp, &["rsvp", "attend", "confirm"]),
    (ChatIntent::Registry, &["gift", "registry", "present"]),
    (
        ChatIntent::Travel,
        &["parking", "hotel", "travel", "directions", "transport"],
    ),
];

/// Produce a reply for a guest message.
pub fn respond(message: &str, ctx: &ChatContext<'_>) -> ChatReply {
    let normalized = message.to_lowercase();

    let intent = INTENTS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(intent, _)| *intent)
        .unwrap_or(ChatIntent::Fallback);

    ChatReply {
        intent,
        reply: format_reply(intent, ctx),
    }
}

fn format_reply(intent: ChatIntent, ctx: &ChatContext<'_>) -> String {
    match intent {
        ChatIntent::Venue => match (ctx.venue_name, ctx.venue_address) {
            (Some(name), Some(address)) => {
                format!("The celebration takes place at {}, {}.", name, address)
            }
            (Some(name), None) => format!("The celebration takes place at {}.", name),
            _ => "The venue details will be announced soon.".to_string(),
        },
        ChatIntent::Schedule => {
            let date = ctx.wedding_date.format("%B %d, %Y");
            match ctx.events.first() {
                Some(event) => format!(
                    "The wedding is on {}. {} starts at {}.",
                    date,
                    event.name,
                    event.starts_at.format("%H:%M")
                ),
                None => format!("The wedding is on {}.", date),
            }
        }
        ChatIntent::DressCode => {
            let dress_code = ctx.events.iter().find_map(|e| e.dress_code.as_deref());
            match dress_code {
                Some(code) => format!("The dress code is: {}.", code),
                None => "There is no formal dress code. Come comfortable!".to_string(),
            }
        }
        ChatIntent::Rsvp => {
            "You can RSVP right here on the website using your invitation link.".to_string()
        }
        ChatIntent::Registry => format!(
            "{} would love your presence above all. Registry details are on the website.",
            ctx.partner_names
        ),
        ChatIntent::Travel => match ctx.venue_address {
            Some(address) => format!(
                "The venue is at {}. Parking is available nearby; check the website for travel tips.",
                address
            ),
            None => "Travel and parking details will be announced soon.".to_string(),
        },
        ChatIntent::Fallback => format!(
            "I can help with the venue, schedule, dress code, RSVP, registry or travel for {}'s wedding. What would you like to know?",
            ctx.partner_names
        ),
    }
}
