//! Guest entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Guest;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the guests table.
#[derive(Debug, Clone, FromRow)]
pub struct GuestEntity {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub attending: Option<bool>,
    pub dietary_restrictions: Option<String>,
    pub plus_one_allowed: bool,
    pub plus_one_name: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GuestEntity> for Guest {
    fn from(entity: GuestEntity) -> Self {
        Self {
            id: entity.id,
            wedding_id: entity.wedding_id,
            full_name: entity.full_name,
            email: entity.email,
            attending: entity.attending,
            dietary_restrictions: entity.dietary_restrictions,
            plus_one_allowed: entity.plus_one_allowed,
            plus_one_name: entity.plus_one_name,
            responded_at: entity.responded_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
