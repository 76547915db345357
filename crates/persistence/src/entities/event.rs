//! Wedding event entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::WeddingEvent;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the wedding_events table.
#[derive(Debug, Clone, FromRow)]
pub struct WeddingEventEntity {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub dress_code: Option<String>,
    pub sort_order: i32,
}

impl From<WeddingEventEntity> for WeddingEvent {
    fn from(entity: WeddingEventEntity) -> Self {
        Self {
            id: entity.id,
            wedding_id: entity.wedding_id,
            name: entity.name,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            venue_name: entity.venue_name,
            venue_address: entity.venue_address,
            dress_code: entity.dress_code,
            sort_order: entity.sort_order,
        }
    }
}
