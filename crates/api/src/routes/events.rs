//! Wedding event routes.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use domain::models::event::ListEventsResponse;
use domain::models::WeddingEvent;
use persistence::repositories::EventRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::sites::{authorize, SiteQuery};

/// List the events of a wedding.
///
/// GET /api/v1/sites/:slug/events
///
/// Gated by the site access decision; password-protected sites re-supply
/// the password via the `X-Site-Password` header.
pub async fn list_events(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SiteQuery>,
    headers: HeaderMap,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let (site, _decision) = authorize(&state, &slug, query.guest, &headers).await?;

    let event_repo = EventRepository::new(state.pool.clone());
    let events: Vec<WeddingEvent> = event_repo
        .list_for_wedding(site.wedding.id)
        .await?
        .into_iter()
        .map(WeddingEvent::from)
        .collect();

    info!(
        slug = %slug,
        event_count = events.len(),
        "Listed wedding events"
    );

    Ok(Json(ListEventsResponse { data: events }))
}
