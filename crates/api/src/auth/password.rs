//! Account passwords: Argon2id hashing and the minimum-length rule.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use society_core::error::CoreError;

/// Shortest password accepted on register or password change.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash `password` into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check the length rule, then hash. Used wherever a user picks a password.
pub fn hash_new_password(password: &str) -> Result<String, CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    hash_password(password).map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))
}

/// `Ok(false)` on a mismatch; `Err` only if `stored` is not a valid PHC hash.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn demo_password_round_trips() {
        let stored = hash_new_password("pass123").unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert!(verify_password("pass123", &stored).unwrap());
        assert!(!verify_password("pass124", &stored).unwrap());
    }

    #[test]
    fn short_password_rejected() {
        assert_matches!(
            hash_new_password("abc"),
            Err(CoreError::Validation(msg)) if msg.contains("at least 6 characters")
        );
    }

    #[test]
    fn corrupt_stored_hash_is_error() {
        assert!(verify_password("pass123", "plaintext-from-old-import").is_err());
    }
}
