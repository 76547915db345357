//! Website configuration entities (database row mappings).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::website::{Wedding, WebsiteConfig, WebsiteStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for website_status that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "website_status", rename_all = "lowercase")]
pub enum WebsiteStatusDb {
    Active,
    Inactive,
    Draft,
}

impl From<WebsiteStatusDb> for WebsiteStatus {
    fn from(db_status: WebsiteStatusDb) -> Self {
        match db_status {
            WebsiteStatusDb::Active => WebsiteStatus::Active,
            WebsiteStatusDb::Inactive => WebsiteStatus::Inactive,
            WebsiteStatusDb::Draft => WebsiteStatus::Draft,
        }
    }
}

impl From<WebsiteStatus> for WebsiteStatusDb {
    fn from(status: WebsiteStatus) -> Self {
        match status {
            WebsiteStatus::Active => WebsiteStatusDb::Active,
            WebsiteStatus::Inactive => WebsiteStatusDb::Inactive,
            WebsiteStatus::Draft => WebsiteStatusDb::Draft,
        }
    }
}

/// Website config joined with its wedding row, for the by-slug lookup.
#[derive(Debug, Clone, FromRow)]
pub struct WebsiteWithWeddingEntity {
    // website_configs
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub status: WebsiteStatusDb,
    pub visibility: Option<String>,
    pub is_password_protected: bool,
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
    // weddings
    pub slug: String,
    pub partner_names: String,
    pub wedding_date: NaiveDate,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub wedding_is_active: Option<bool>,
    pub wedding_created_at: DateTime<Utc>,
    pub wedding_updated_at: DateTime<Utc>,
}

impl WebsiteWithWeddingEntity {
    /// Split the joined row into its domain models.
    pub fn into_domain(self) -> (WebsiteConfig, Wedding) {
        let wedding = Wedding {
            id: self.wedding_id,
            slug: self.slug,
            partner_names: self.partner_names,
            wedding_date: self.wedding_date,
            venue_name: self.venue_name,
            venue_address: self.venue_address,
            is_active: self.wedding_is_active,
            created_at: self.wedding_created_at,
            updated_at: self.wedding_updated_at,
        };

        let config = WebsiteConfig {
            id: self.id,
            wedding_id: self.wedding_id,
            status: self.status.into(),
            visibility: self.visibility,
            is_password_protected: self.is_password_protected,
            password_hash: self.password_hash,
            welcome_message: self.welcome_message,
            show_hero: self.show_hero,
            show_countdown: self.show_countdown,
            show_story: self.show_story,
            show_gallery: self.show_gallery,
            show_events: self.show_events,
            show_rsvp: self.show_rsvp,
            show_chat: self.show_chat,
            view_count: self.view_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };

        (config, wedding)
    }
}
