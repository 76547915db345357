//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a website slug.
const MAX_SLUG_LENGTH: usize = 64;

/// Maximum length of a chat message a guest may send.
const MAX_CHAT_MESSAGE_LENGTH: usize = 500;

/// Validates that a website slug is lowercase alphanumeric with hyphens.
///
/// Slugs are chosen by the dashboard but arrive here via the URL path, so
/// they are re-checked before being bound into queries.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        let mut err = ValidationError::new("slug_length");
        err.message = Some("Slug must be between 1 and 64 characters".into());
        return Err(err);
    }

    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || slug.starts_with('-') || slug.ends_with('-') {
        let mut err = ValidationError::new("slug_format");
        err.message =
            Some("Slug must be lowercase letters, digits and inner hyphens only".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a chat message is non-blank and within size limits.
pub fn validate_chat_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        let mut err = ValidationError::new("message_empty");
        err.message = Some("Message cannot be empty".into());
        return Err(err);
    }

    if message.len() > MAX_CHAT_MESSAGE_LENGTH {
        let mut err = ValidationError::new("message_length");
        err.message = Some("Message cannot exceed 500 characters".into());
        return Err(err);
    }

    Ok(())
}
