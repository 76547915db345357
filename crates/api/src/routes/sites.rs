//! Wedding site routes: site fetch and password verification.
//!
//! Every guest-facing route funnels through [`SiteData::decide`], the one
//! access decision shared by the whole service. Handlers stay thin: fetch,
//! decide, render the outcome.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use domain::models::guest::{Guest, RsvpState};
use domain::models::website::{PasswordSubmission, Wedding, WebsiteConfig, WeddingSummary};
use domain::services::access::{decide, AccessContext, AccessDecision, ReasonCode};
use domain::services::SectionVisibility;
use persistence::repositories::{GuestRepository, WebsiteRepository};
use serde::{Deserialize, Serialize};
use shared::password::verify_site_password;
use shared::validation::validate_slug;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_password_attempt, record_site_view};

/// Header a frontend may use to re-supply the site password on gated
/// sub-resources (events, RSVP, chat); the verified state is never stored
/// server-side.
pub const SITE_PASSWORD_HEADER: &str = "x-site-password";

/// Query parameters for guest-facing site routes.
#[derive(Debug, Deserialize)]
pub struct SiteQuery {
    /// Guest id carried in the personalized invitation link.
    pub guest: Option<Uuid>,
}

/// Response for the site fetch and password routes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteResponse {
    pub access: AccessDecision,
    /// Present only when access was granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<SitePayload>,
}

/// The renderable site content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SitePayload {
    pub wedding: WeddingSummary,
    pub welcome_message: Option<String>,
    pub sections: SectionVisibility,
    /// RSVP state of the valid guest that opened the site, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsvp: Option<RsvpState>,
}

/// Response for the password verification route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PasswordVerifyResponse {
    pub verified: bool,
    #[serde(flatten)]
    pub site: SiteResponse,
}

/// Everything a route needs to evaluate and render access for one request.
pub(crate) struct SiteData {
    pub config: WebsiteConfig,
    pub wedding: Wedding,
    pub guest: Option<Guest>,
    guest_id_provided: bool,
}

impl SiteData {
    /// Run the access decision for this request.
    pub fn decide(&self, password_verified: bool) -> AccessDecision {
        let ctx = AccessContext {
            status: self.config.status,
            visibility: self.config.visibility.clone(),
            is_password_protected: self.config.is_password_protected,
            wedding_is_active: self.wedding.is_active,
            guest_id_provided: self.guest_id_provided,
            guest_valid: self.guest.is_some(),
            password_verified,
        };
        decide(&ctx)
    }

    /// Check a submitted password against the stored hash.
    ///
    /// A gated site with no hash on record can never verify.
    pub fn verify_password(&self, submitted: &str) -> Result<bool, ApiError> {
        match self.config.password_hash.as_deref() {
            Some(hash) => verify_site_password(submitted, hash)
                .map_err(|e| ApiError::Internal(format!("Password verification failed: {}", e))),
            None => Ok(false),
        }
    }
}

/// Fetch the website config, wedding and (optionally) guest for a slug.
///
/// Returns 404 when the slug matches no wedding; access outcomes are never
/// errors and are decided afterwards by [`SiteData::decide`].
pub(crate) async fn load_site(
    state: &AppState,
    slug: &str,
    guest_id: Option<Uuid>,
) -> Result<SiteData, ApiError> {
    validate_slug(slug).map_err(|e| {
        ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default())
    })?;

    let website_repo = WebsiteRepository::new(state.pool.clone());
    let entity = website_repo
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Wedding website not found".to_string()))?;
    let (config, wedding) = entity.into_domain();

    let guest = match guest_id {
        Some(id) => {
            let guest_repo = GuestRepository::new(state.pool.clone());
            guest_repo
                .find_by_id_and_wedding(id, wedding.id)
                .await?
                .map(Guest::from)
        }
        None => None,
    };

    Ok(SiteData {
        config,
        wedding,
        guest,
        guest_id_provided: guest_id.is_some(),
    })
}

/// Evaluate access for a gated sub-resource, honoring the password header.
///
/// Returns the granted decision, or `Forbidden` carrying the denial message.
pub(crate) async fn authorize(
    state: &AppState,
    slug: &str,
    guest_id: Option<Uuid>,
    headers: &HeaderMap,
) -> Result<(SiteData, AccessDecision), ApiError> {
    let site = load_site(state, slug, guest_id).await?;
    let mut decision = site.decide(false);

    if decision.reason == ReasonCode::PasswordRequired {
        if let Some(password) = headers
            .get(SITE_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            if site.verify_password(password)? {
                decision = site.decide(true);
            }
        }
    }

    if !decision.has_access {
        return Err(ApiError::Forbidden(decision.message));
    }

    Ok((site, decision))
}

/// Render the response for a decided request.
fn site_response(site: &SiteData, decision: AccessDecision) -> SiteResponse {
    if !decision.has_access {
        return SiteResponse {
            access: decision,
            website: None,
        };
    }

    SiteResponse {
        access: decision,
        website: Some(SitePayload {
            wedding: WeddingSummary::from(&site.wedding),
            welcome_message: site.config.welcome_message.clone(),
            sections: SectionVisibility::resolve(&site.config),
            rsvp: site.guest.as_ref().map(RsvpState::from),
        }),
    }
}

/// Fetch a wedding site by slug.
///
/// GET /api/v1/sites/:slug?guest=<uuid>
///
/// Always 200 for a known slug: the access decision is the response, and
/// the frontend renders exactly one branch from `access.reason`.
pub async fn get_site(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SiteQuery>,
) -> Result<Json<SiteResponse>, ApiError> {
    let site = load_site(&state, &slug, query.guest).await?;
    let decision = site.decide(false);

    record_site_view(&decision.reason.to_string());

    // View counting is best-effort; a failed bump never blocks the page
    let website_repo = WebsiteRepository::new(state.pool.clone());
    if let Err(err) = website_repo.increment_view_count(site.config.id).await {
        warn!(slug = %slug, error = %err, "Failed to increment view count");
    }

    info!(
        slug = %slug,
        reason = %decision.reason,
        has_access = decision.has_access,
        "Site access evaluated"
    );

    Ok(Json(site_response(&site, decision)))
}

/// Verify the password of a protected site.
///
/// POST /api/v1/sites/:slug/password
///
/// On a match the decision is re-run with `password_verified = true` and the
/// full payload is returned. A mismatch is a routine outcome (200 with
/// `verified: false`), not an error; attempts are throttled per client by
/// middleware.
pub async fn verify_password(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<PasswordSubmission>,
) -> Result<Json<PasswordVerifyResponse>, ApiError> {
    request.validate()?;

    let site = load_site(&state, &slug, request.guest).await?;
    let decision = site.decide(false);

    // Redirect/inactive/invalid-guest outcomes outrank the password gate, and
    // an ungated site has nothing to verify against
    if decision.reason != ReasonCode::PasswordRequired {
        return Ok(Json(PasswordVerifyResponse {
            verified: false,
            site: site_response(&site, decision),
        }));
    }

    let verified = site.verify_password(&request.password)?;
    record_password_attempt(verified);

    if !verified {
        info!(slug = %slug, "Password attempt rejected");
        return Ok(Json(PasswordVerifyResponse {
            verified: false,
            site: site_response(&site, decision),
        }));
    }

    let decision = site.decide(true);
    info!(slug = %slug, "Password verified");

    Ok(Json(PasswordVerifyResponse {
        verified: true,
        site: site_response(&site, decision),
    }))
}
