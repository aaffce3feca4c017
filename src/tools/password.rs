use std::ops::RangeInclusive;
use thiserror::Error;

pub const COST_RANGE: RangeInclusive<u32> = 4..=12;
pub const DEFAULT_COST: u32 = 10;
pub const MATCH_MESSAGE: &str = "✓ Password matches hash";
pub const MISMATCH_MESSAGE: &str = "✗ Password does not match hash";

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Please enter a password")]
    EmptyPassword,

    #[error("Please enter both password and hash")]
    MissingInput,

    #[error("Rounds must be between {} and {}", COST_RANGE.start(), COST_RANGE.end())]
    CostOutOfRange(u32),

    #[error("✗ Invalid hash format")]
    InvalidHash(#[source] bcrypt::BcryptError),

    #[error("Error generating hash: {0}")]
    Hash(#[source] bcrypt::BcryptError),
}

/// Hash with a fresh random salt.
pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    if !COST_RANGE.contains(&cost) {
        return Err(PasswordError::CostOutOfRange(cost));
    }

    bcrypt::hash(password, cost).map_err(PasswordError::Hash)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let hash = hash.trim();
    if password.is_empty() || hash.is_empty() {
        return Err(PasswordError::MissingInput);
    }

    bcrypt::verify(password, hash).map_err(PasswordError::InvalidHash)
}

pub fn hashed_message(cost: u32) -> String {
    format!("Hash generated successfully with {} rounds", cost)
}

pub fn verify_message(matches: bool) -> &'static str {
    if matches { MATCH_MESSAGE } else { MISMATCH_MESSAGE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("hunter2", 4).unwrap();
        assert!(hash.starts_with("$2b$04$"));
        assert_eq!(hash.len(), 60);
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn salts_differ_between_calls() {
        let first = hash_password("same", 4).unwrap();
        let second = hash_password("same", 4).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_accepts_other_version_prefixes() {
        let hash = hash_password("x", 4).unwrap().replacen("$2b$", "$2a$", 1);
        assert!(verify_password("x", &hash).unwrap());
    }

    #[test]
    fn reject_empty_password_and_bad_cost() {
        assert!(matches!(hash_password("", 10), Err(PasswordError::EmptyPassword)));
        assert!(matches!(hash_password("pw", 3), Err(PasswordError::CostOutOfRange(3))));
        assert!(matches!(hash_password("pw", 13), Err(PasswordError::CostOutOfRange(13))));
        assert_eq!(
            PasswordError::CostOutOfRange(3).to_string(),
            "Rounds must be between 4 and 12"
        );
    }

    #[test]
    fn verify_reports_malformed_hash() {
        assert!(matches!(
            verify_password("pw", "not-a-hash"),
            Err(PasswordError::InvalidHash(_))
        ));
        assert!(matches!(verify_password("", "$2b$"), Err(PasswordError::MissingInput)));
    }

    #[test]
    fn result_messages() {
        assert_eq!(hashed_message(10), "Hash generated successfully with 10 rounds");
        assert_eq!(verify_message(true), "✓ Password matches hash");
        assert_eq!(verify_message(false), "✗ Password does not match hash");
    }
}
