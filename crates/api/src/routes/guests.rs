//! Guest RSVP routes.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use domain::models::guest::{Guest, RsvpRequest, RsvpState};
use persistence::repositories::GuestRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_rsvp_submitted;
use crate::routes::sites::authorize;

/// Record a guest's attendance response.
///
/// POST /api/v1/sites/:slug/guests/:guest_id/rsvp
///
/// The guest id in the path doubles as the access credential: the decision
/// runs with it, so an id that matches no guest of this wedding is denied
/// before any write.
pub async fn submit_rsvp(
    State(state): State<AppState>,
    Path((slug, guest_id)): Path<(String, Uuid)>,
    headers: HeaderMap,
    Json(request): Json<RsvpRequest>,
) -> Result<Json<RsvpState>, ApiError> {
    request.validate()?;

    let (site, _decision) = authorize(&state, &slug, Some(guest_id), &headers).await?;

    // authorize() verified the pair exists; a racing delete still surfaces here
    let guest_repo = GuestRepository::new(state.pool.clone());
    let updated = guest_repo
        .record_rsvp(
            guest_id,
            site.wedding.id,
            request.attending,
            request.dietary_restrictions.as_deref(),
            request.plus_one_name.as_deref(),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Guest not found".to_string()))?;

    record_rsvp_submitted(request.attending);

    info!(
        slug = %slug,
        guest_id = %guest_id,
        attending = request.attending,
        "RSVP recorded"
    );

    let guest = Guest::from(updated);
    Ok(Json(RsvpState::from(&guest)))
}
