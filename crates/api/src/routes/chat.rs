//! Chatbot routes.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use domain::models::WeddingEvent;
use domain::services::chatbot::{respond, ChatContext, ChatReply};
use domain::services::SectionVisibility;
use persistence::repositories::EventRepository;
use serde::Deserialize;
use shared::validation::validate_chat_message;
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::sites::authorize;

/// A guest message to the chatbot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChatRequest {
    pub message: String,
    pub guest: Option<Uuid>,
}

/// Answer a guest question with the keyword responder.
///
/// POST /api/v1/sites/:slug/chat
///
/// Gated by the site access decision, and only exposed when the owner has
/// explicitly enabled the chat section (hidden by default).
pub async fn chat_message(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    validate_chat_message(&request.message).map_err(|e| {
        ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default())
    })?;

    let (site, _decision) = authorize(&state, &slug, request.guest, &headers).await?;

    if !SectionVisibility::resolve(&site.config).chat {
        return Err(ApiError::NotFound(
            "Chat is not enabled for this website".to_string(),
        ));
    }

    let event_repo = EventRepository::new(state.pool.clone());
    let events: Vec<WeddingEvent> = event_repo
        .list_for_wedding(site.wedding.id)
        .await?
        .into_iter()
        .map(WeddingEvent::from)
        .collect();

    let ctx = ChatContext {
        partner_names: &site.wedding.partner_names,
        wedding_date: site.wedding.wedding_date,
        venue_name: site.wedding.venue_name.as_deref(),
        venue_address: site.wedding.venue_address.as_deref(),
        events: &events,
    };

    let reply = respond(&request.message, &ctx);

    info!(
        slug = %slug,
        intent = ?reply.intent,
        "Chat message answered"
    );

    Ok(Json(reply))
}
