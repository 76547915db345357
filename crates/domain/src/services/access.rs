//! Access decision for guest-facing wedding microsites.
//!
//! A single pure function gates every guest-facing route. The page layer
//! fetches the website config (joined with its wedding), optionally looks up
//! the guest from the `?guest=` query parameter, and calls [`decide`]. The
//! password-submission handler is the only caller that ever passes
//! `password_verified = true`, after checking the submission against the
//! stored hash. The verified state is never persisted, so every request
//! re-runs the full decision.

use serde::Serialize;

use crate::models::website::WebsiteStatus;

/// Inputs to the access decision, assembled by the route layer.
///
/// The decision is a pure function of this context: no hidden state, no
/// I/O, idempotent.
#[derive(Debug, Clone)]
pub struct AccessContext {
    pub status: WebsiteStatus,
    /// `Some("none")` forces a redirect away, overriding every other field.
    pub visibility: Option<String>,
    pub is_password_protected: bool,
    /// From the wedding record; NULL is treated as active.
    pub wedding_is_active: Option<bool>,
    /// A guest id was present in the request, whether or not it matched.
    pub guest_id_provided: bool,
    /// The supplied guest id matched a row for this wedding.
    pub guest_valid: bool,
    /// The password submission handler verified the password this request.
    pub password_verified: bool,
}

/// Terminal access outcomes, in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    ForcedRedirect,
    Inactive,
    InvalidGuest,
    Restricted,
    #[serde(rename = "password")]
    PasswordRequired,
    PasswordVerified,
    Active,
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForcedRedirect => write!(f, "forced_redirect"),
            Self::Inactive => write!(f, "inactive"),
            Self::InvalidGuest => write!(f, "invalid_guest"),
            Self::Restricted => write!(f, "restricted"),
            Self::PasswordRequired => write!(f, "password"),
            Self::PasswordVerified => write!(f, "password_verified"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// Outcome of the access decision.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AccessDecision {
    pub has_access: bool,
    pub reason: ReasonCode,
    pub message: String,
}

impl AccessDecision {
    fn denied(reason: ReasonCode, message: &str) -> Self {
        Self {
            has_access: false,
            reason,
            message: message.to_string(),
        }
    }

    fn granted(reason: ReasonCode, message: &str) -> Self {
        Self {
            has_access: true,
            reason,
            message: message.to_string(),
        }
    }
}

/// Whether the site is behind the password gate.
///
/// Draft sites are an implicit password gate: the owner can preview with the
/// password before publishing.
fn is_password_gated(ctx: &AccessContext) -> bool {
    ctx.is_password_protected || ctx.status == WebsiteStatus::Draft
}

/// Decide whether the current visitor may see the site.
///
/// Rules are evaluated in strict priority order; the first match wins:
///
/// 1. `visibility == "none"` forces a redirect, overriding everything.
/// 2. An inactive website (or explicitly deactivated wedding) is unavailable.
/// 3. A supplied guest id that matches no row is invalid access.
/// 4. Without a guest id, a non-gated site is invite-only.
/// 5. A password-gated site (protected flag, or draft) blocks until verified.
/// 6. A verified password grants access.
/// 7. Otherwise the visitor is in: a valid guest, or a public active site.
pub fn decide(ctx: &AccessContext) -> AccessDecision {
    if ctx.visibility.as_deref() == Some("none") {
        return AccessDecision::denied(
            ReasonCode::ForcedRedirect,
            "This website is unavailable. Redirecting to the home page.",
        );
    }

    if ctx.status == WebsiteStatus::Inactive || ctx.wedding_is_active == Some(false) {
        return AccessDecision::denied(
            ReasonCode::Inactive,
            "This wedding website is currently unavailable.",
        );
    }

    if ctx.guest_id_provided && !ctx.guest_valid {
        return AccessDecision::denied(
            ReasonCode::InvalidGuest,
            "Invalid guest access. Please use the link sent to you.",
        );
    }

    let gated = is_password_gated(ctx);

    if !ctx.guest_id_provided && !gated {
        return AccessDecision::denied(
            ReasonCode::Restricted,
            "This website is invite-only. Please use your personalized \
             invitation link or tap your smart card.",
        );
    }

    if gated && !ctx.password_verified {
        return AccessDecision::denied(
            ReasonCode::PasswordRequired,
            "This website is password protected. Please enter the password to continue.",
        );
    }

    if gated {
        return AccessDecision::granted(ReasonCode::PasswordVerified, "Password accepted. Welcome!");
    }

    AccessDecision::granted(ReasonCode::Active, "Welcome!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public_active_site() -> AccessContext {
        AccessContext {
            status: WebsiteStatus::Active,
            visibility: None,
            is_password_protected: false,
            wedding_is_active: None,
            guest_id_provided: false,
            guest_valid: false,
            password_verified: false,
        }
    }

    #[test]
    fn test_forced_redirect_overrides_everything() {
        // Even a valid guest with a verified password is redirected
        let ctx = AccessContext {
            visibility: Some("none".to_string()),
            guest_id_provided: true,
            guest_valid: true,
            password_verified: true,
            is_password_protected: true,
            ..public_active_site()
        };
        let decision = decide(&ctx);
        assert_eq!(decision.reason, ReasonCode::ForcedRedirect);
        assert!(!decision.has_access);
    }

    #[test]
    fn test_other_visibility_values_do_not_redirect() {
        let ctx = AccessContext {
            visibility: Some("public".to_string()),
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        assert_eq!(decide(&ctx).reason, ReasonCode::Active);
    }

    #[test]
    fn test_inactive_status_blocks_regardless_of_password_fields() {
        // Scenario C
        let ctx = AccessContext {
            status: WebsiteStatus::Inactive,
            is_password_protected: true,
            password_verified: true,
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        let decision = decide(&ctx);
        assert_eq!(decision.reason, ReasonCode::Inactive);
        assert!(!decision.has_access);
    }

    #[test]
    fn test_deactivated_wedding_is_inactive() {
        let ctx = AccessContext {
            wedding_is_active: Some(false),
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        assert_eq!(decide(&ctx).reason, ReasonCode::Inactive);
    }

    #[test]
    fn test_null_wedding_is_active_is_permissive() {
        let ctx = AccessContext {
            wedding_is_active: None,
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        assert_eq!(decide(&ctx).reason, ReasonCode::Active);

        let ctx = AccessContext {
            wedding_is_active: Some(true),
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        assert_eq!(decide(&ctx).reason, ReasonCode::Active);
    }

    #[test]
    fn test_unmatched_guest_id_is_invalid_guest() {
        // Scenario E
        let ctx = AccessContext {
            guest_id_provided: true,
            guest_valid: false,
            ..public_active_site()
        };
        let decision = decide(&ctx);
        assert_eq!(decision.reason, ReasonCode::InvalidGuest);
        assert!(!decision.has_access);
        assert!(decision.message.contains("link sent to you"));
    }

    #[test]
    fn test_no_guest_id_on_public_site_is_restricted() {
        // Scenario A
        let decision = decide(&public_active_site());
        assert_eq!(decision.reason, ReasonCode::Restricted);
        assert!(!decision.has_access);
    }

    #[test]
    fn test_password_gate_blocks_until_verified() {
        // Scenario B, first render
        let ctx = AccessContext {
            is_password_protected: true,
            ..public_active_site()
        };
        let decision = decide(&ctx);
        assert_eq!(decision.reason, ReasonCode::PasswordRequired);
        assert!(!decision.has_access);
    }

    #[test]
    fn test_password_gate_opens_once_verified() {
        // Scenario B, after a matching submission
        let ctx = AccessContext {
            is_password_protected: true,
            password_verified: true,
            ..public_active_site()
        };
        let decision = decide(&ctx);
        assert_eq!(decision.reason, ReasonCode::PasswordVerified);
        assert!(decision.has_access);
    }

    #[test]
    fn test_password_gate_applies_to_valid_guests_too() {
        let ctx = AccessContext {
            is_password_protected: true,
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        assert_eq!(decide(&ctx).reason, ReasonCode::PasswordRequired);

        let ctx = AccessContext {
            is_password_protected: true,
            guest_id_provided: true,
            guest_valid: true,
            password_verified: true,
            ..public_active_site()
        };
        assert_eq!(decide(&ctx).reason, ReasonCode::PasswordVerified);
    }

    #[test]
    fn test_draft_is_an_implicit_password_gate() {
        // Scenario D
        let ctx = AccessContext {
            status: WebsiteStatus::Draft,
            ..public_active_site()
        };
        let decision = decide(&ctx);
        assert_eq!(decision.reason, ReasonCode::PasswordRequired);
        assert!(!decision.has_access);

        let ctx = AccessContext {
            status: WebsiteStatus::Draft,
            password_verified: true,
            ..public_active_site()
        };
        assert!(decide(&ctx).has_access);
    }

    #[test]
    fn test_valid_guest_on_public_site_is_active() {
        let ctx = AccessContext {
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        let decision = decide(&ctx);
        assert_eq!(decision.reason, ReasonCode::Active);
        assert!(decision.has_access);
    }

    #[test]
    fn test_invalid_guest_takes_priority_over_password_gate() {
        let ctx = AccessContext {
            is_password_protected: true,
            guest_id_provided: true,
            guest_valid: false,
            password_verified: true,
            ..public_active_site()
        };
        assert_eq!(decide(&ctx).reason, ReasonCode::InvalidGuest);
    }

    #[test]
    fn test_decision_is_idempotent() {
        let ctx = AccessContext {
            is_password_protected: true,
            guest_id_provided: true,
            guest_valid: true,
            ..public_active_site()
        };
        let first = decide(&ctx);
        let second = decide(&ctx);
        assert_eq!(first.reason, second.reason);
        assert_eq!(first.has_access, second.has_access);
        assert_eq!(first.message, second.message);
    }

    #[test]
    fn test_reason_code_serialization() {
        assert_eq!(
            serde_json::to_string(&ReasonCode::ForcedRedirect).unwrap(),
            "\"forced_redirect\""
        );
        assert_eq!(
            serde_json::to_string(&ReasonCode::PasswordRequired).unwrap(),
            "\"password\""
        );
        assert_eq!(
            serde_json::to_string(&ReasonCode::PasswordVerified).unwrap(),
            "\"password_verified\""
        );
        assert_eq!(serde_json::to_string(&ReasonCode::Active).unwrap(), "\"active\"");
    }

    #[test]
    fn test_reason_code_display_matches_serialization() {
        for reason in [
            ReasonCode::ForcedRedirect,
            ReasonCode::Inactive,
            ReasonCode::InvalidGuest,
            ReasonCode::Restricted,
            ReasonCode::PasswordRequired,
            ReasonCode::PasswordVerified,
            ReasonCode::Active,
        ] {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason));
        }
    }
}
