//! Section visibility resolution for an accessible site.
//!
//! Consulted only after the access decision has granted access; these flags
//! gate sections of the page, never the page itself.

use serde::Serialize;

use crate::models::website::WebsiteConfig;

/// Resolved section visibility for the site payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SectionVisibility {
    pub hero: bool,
    pub countdown: bool,
    pub story: bool,
    pub gallery: bool,
    pub events: bool,
    pub rsvp: bool,
    pub chat: bool,
}

/// `true` or NULL shows the section; only an explicit `false` hides it.
fn shown(flag: Option<bool>) -> bool {
    flag.unwrap_or(true)
}

impl SectionVisibility {
    /// Resolve the toggles of a website config into plain booleans.
    ///
    /// `show_chat` has the inverted default: hidden unless explicitly true.
    pub fn resolve(config: &WebsiteConfig) -> Self {
        Self {
            hero: shown(config.show_hero),
            countdown: shown(config.show_countdown),
            story: shown(config.show_story),
            gallery: shown(config.show_gallery),
            events: shown(config.show_events),
            rsvp: shown(config.show_rsvp),
            chat: config.show_chat == Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::website::WebsiteStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn config_with_toggles(
        gallery: Option<bool>,
        chat: Option<bool>,
    ) -> WebsiteConfig {
        WebsiteConfig {
            id: Uuid::new_v4(),
            wedding_id: Uuid::new_v4(),
            status: WebsiteStatus::Active,
            visibility: None,
            is_password_protected: false,
            password_hash: None,
            welcome_message: None,
            show_hero: None,
            show_countdown: Some(true),
            show_story: Some(false),
            show_gallery: gallery,
            show_events: None,
            show_rsvp: None,
            show_chat: chat,
            view_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_null_defaults_to_shown() {
        // Scenario F: show_gallery NULL renders the gallery
        let sections = SectionVisibility::resolve(&config_with_toggles(None, None));
        assert!(sections.gallery);
        assert!(sections.hero);
        assert!(sections.events);
        assert!(sections.rsvp);
    }

    #[test]
    fn test_explicit_false_hides() {
        let sections = SectionVisibility::resolve(&config_with_toggles(Some(false), None));
        assert!(!sections.gallery);
        // story was explicitly false in the fixture
        assert!(!sections.story);
        assert!(sections.countdown);
    }

    #[test]
    fn test_explicit_true_shows() {
        let sections = SectionVisibility::resolve(&config_with_toggles(Some(true), None));
        assert!(sections.gallery);
    }

    #[test]
    fn test_chat_default_is_inverted() {
        // Scenario F: show_chat NULL keeps the chat hidden
        assert!(!SectionVisibility::resolve(&config_with_toggles(None, None)).chat);
        assert!(!SectionVisibility::resolve(&config_with_toggles(None, Some(false))).chat);
        assert!(SectionVisibility::resolve(&config_with_toggles(None, Some(true))).chat);
    }
}
