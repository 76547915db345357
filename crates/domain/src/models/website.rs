//! Wedding and website configuration domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle state of a wedding microsite, set by the site owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteStatus {
    Active,
    Inactive,
    Draft,
}

impl std::fmt::Display for WebsiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Draft => write!(f, "draft"),
        }
    }
}

/// A couple's wedding record.
///
/// Created and mutated by the owner dashboard; this service only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Wedding {
    pub id: Uuid,
    pub slug: String,
    pub partner_names: String,
    pub wedding_date: NaiveDate,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    /// NULL is treated as active; only an explicit false deactivates.
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Website configuration for a wedding microsite.
///
/// Section toggles are tri-state: `true` or NULL shows the section, only an
/// explicit `false` hides it. `show_chat` is the one inverted default: the
/// chat widget stays hidden unless explicitly enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WebsiteConfig {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub status: WebsiteStatus,
    /// `"none"` forces a redirect away from the site, overriding everything.
    pub visibility: Option<String>,
    pub is_password_protected: bool,
    /// Argon2id PHC string; never serialized out.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub welcome_message: Option<String>,
    pub show_hero: Option<bool>,
    pub show_countdown: Option<bool>,
    pub show_story: Option<bool>,
    pub show_gallery: Option<bool>,
    pub show_events: Option<bool>,
    pub show_rsvp: Option<bool>,
    pub show_chat: Option<bool>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wedding summary included in the site payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WeddingSummary {
    pub partner_names: String,
    pub wedding_date: NaiveDate,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
}

impl From<&Wedding> for WeddingSummary {
    fn from(wedding: &Wedding) -> Self {
        Self {
            partner_names: wedding.partner_names.clone(),
            wedding_date: wedding.wedding_date,
            venue_name: wedding.venue_name.clone(),
            venue_address: wedding.venue_address.clone(),
        }
    }
}

/// Request to unlock a password-protected site.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PasswordSubmission {
    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,

    /// Optional guest id carried through from the invitation link.
    pub guest: Option<Uuid>,
}
