//! Site password hashing utilities using Argon2id.
//!
//! Wedding websites can be protected by a shared secret the couple hands to
//! their guests. The secret is stored as an Argon2id hash (never plaintext)
//! and verified in constant time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Error type for site password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Argon2id parameters following OWASP recommendations (2024).
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
const MEMORY_COST: u32 = 19456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

fn create_argon2() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
        .map_err(|e| PasswordError::HashError(format!("Failed to create Argon2 params: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a site password using Argon2id.
///
/// Returns a PHC-formatted string that includes the algorithm, parameters,
/// salt, and hash, which is what the dashboard stores in
/// `website_configs.password_hash`.
///
/// # Example
/// ```
/// use shared::password::hash_site_password;
///
/// let hash = hash_site_password("smith-wedding-2026").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_site_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = create_argon2()?;

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a submitted site password against the stored hash.
///
/// Verification is constant-time; the result only says whether the guest's
/// submission matches, never why not.
///
/// # Example
/// ```
/// use shared::password::{hash_site_password, verify_site_password};
///
/// let hash = hash_site_password("test123").unwrap();
/// assert!(verify_site_password("test123", &hash).unwrap());
/// assert!(!verify_site_password("wrong", &hash).unwrap());
/// ```
pub fn verify_site_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    // The stored hash carries its own parameters, so defaults suffice here
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_site_password_returns_phc_format() {
        let hash = hash_site_password("test123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("$v=19$"));
        assert!(hash.contains("m=19456"));
        assert!(hash.contains("t=2"));
        assert!(hash.contains("p=1"));
    }

    #[test]
    fn test_hash_site_password_produces_unique_hashes() {
        let hash1 = hash_site_password("same_secret").unwrap();
        let hash2 = hash_site_password("same_secret").unwrap();
        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_site_password_correct() {
        let password = "our-big-day-2026!";
        let hash = hash_site_password(password).unwrap();
        assert!(verify_site_password(password, &hash).unwrap());
    }

    #[test]
    fn test_verify_site_password_incorrect() {
        let hash = hash_site_password("correct_secret").unwrap();
        assert!(!verify_site_password("wrong_secret", &hash).unwrap());
    }

    #[test]
    fn test_verify_site_password_is_case_sensitive() {
        let hash = hash_site_password("Test123").unwrap();
        assert!(verify_site_password("Test123", &hash).unwrap());
        assert!(!verify_site_password("test123", &hash).unwrap());
    }

    #[test]
    fn test_verify_site_password_empty() {
        let hash = hash_site_password("").unwrap();
        assert!(verify_site_password("", &hash).unwrap());
        assert!(!verify_site_password("not_empty", &hash).unwrap());
    }

    #[test]
    fn test_verify_site_password_invalid_hash() {
        let result = verify_site_password("password", "not_a_phc_string");
        assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
    }

    #[test]
    fn test_hash_site_password_unicode() {
        let password = "свадьба-2026-💍";
        let hash = hash_site_password(password).unwrap();
        assert!(verify_site_password(password, &hash).unwrap());
        assert!(!verify_site_password("different", &hash).unwrap());
    }

    #[test]
    fn test_password_error_display() {
        let err = PasswordError::HashError("boom".to_string());
        assert!(format!("{}", err).contains("boom"));

        let err = PasswordError::InvalidHashFormat;
        assert!(format!("{}", err).contains("Invalid password hash format"));
    }
}
