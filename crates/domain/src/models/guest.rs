//! Guest domain models and RSVP request shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An invited guest of a specific wedding.
///
/// Guests are looked up by `(id, wedding_id)`; an id that does not match a
/// row for that wedding is equivalent to "no guest".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Guest {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    /// NULL means the guest has not responded yet.
    pub attending: Option<bool>,
    pub dietary_restrictions: Option<String>,
    pub plus_one_allowed: bool,
    pub plus_one_name: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to record a guest's attendance response.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RsvpRequest {
    pub attending: bool,

    #[validate(length(max = 500, message = "Dietary restrictions cannot exceed 500 characters"))]
    pub dietary_restrictions: Option<String>,

    #[validate(length(max = 100, message = "Plus-one name cannot exceed 100 characters"))]
    pub plus_one_name: Option<String>,
}

/// RSVP state echoed back in site and RSVP responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RsvpState {
    pub guest_id: Uuid,
    pub full_name: String,
    pub attending: Option<bool>,
    pub dietary_restrictions: Option<String>,
    pub plus_one_allowed: bool,
    pub plus_one_name: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl From<&Guest> for RsvpState {
    fn from(guest: &Guest) -> Self {
        Self {
            guest_id: guest.id,
            full_name: guest.full_name.clone(),
            attending: guest.attending,
            dietary_restrictions: guest.dietary_restrictions.clone(),
            plus_one_allowed: guest.plus_one_allowed,
            plus_one_name: guest.plus_one_name.clone(),
            responded_at: guest.responded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsvp_request_validation() {
        let valid = RsvpRequest {
            attending: true,
            dietary_restrictions: Some("vegetarian".to_string()),
            plus_one_name: None,
        };
        assert!(valid.validate().is_ok());

        let too_long = RsvpRequest {
            attending: true,
            dietary_restrictions: Some("x".repeat(501)),
            plus_one_name: None,
        };
        assert!(too_long.validate().is_err());

        let long_plus_one = RsvpRequest {
            attending: false,
            dietary_restrictions: None,
            plus_one_name: Some("y".repeat(101)),
        };
        assert!(long_plus_one.validate().is_err());
    }

    #[test]
    fn test_rsvp_state_from_guest() {
        let guest = Guest {
            id: Uuid::new_v4(),
            wedding_id: Uuid::new_v4(),
            full_name: "Ada Lovelace".to_string(),
            email: None,
            attending: Some(true),
            dietary_restrictions: None,
            plus_one_allowed: true,
            plus_one_name: Some("Charles".to_string()),
            responded_at: Some(Utc::now()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let state = RsvpState::from(&guest);
        assert_eq!(state.guest_id, guest.id);
        assert_eq!(state.full_name, "Ada Lovelace");
        assert_eq!(state.attending, Some(true));
        assert!(state.plus_one_allowed);
        assert_eq!(state.plus_one_name.as_deref(), Some("Charles"));
    }
}
