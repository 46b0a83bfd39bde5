//! Credential secret value object.
//!
//! Account secrets are never stored or compared in plain text: they are
//! hashed with Argon2 at registration and verified against the hash at login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_SECRET_LENGTH;
use crate::errors::{AppError, AppResult};

/// Stand-in hash verified when no account matches the submitted email, so a
/// failed lookup costs the same as a failed verification.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$R6Yb0GJ2FsS8cDVfkuLvOmYuZ7GmWc+4bn5dJ8pMF0A";

/// Argon2 hash of an account secret.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretHash(String);

// Don't expose hash in debug output
impl std::fmt::Debug for SecretHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretHash([REDACTED])")
    }
}

impl SecretHash {
    /// Hash a plain-text secret with a fresh random salt.
    ///
    /// # Errors
    /// Returns a validation error if the secret is shorter than the minimum length.
    pub fn hash(plain_text: &str) -> AppResult<Self> {
        if plain_text.len() < MIN_SECRET_LENGTH as usize {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_SECRET_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Secret hashing failed: {}", e)))?;

        Ok(Self(hash.to_string()))
    }

    /// Wrap a hash loaded from storage.
    pub fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    /// Hash that never verifies successfully.
    pub fn dummy() -> Self {
        Self(DUMMY_HASH.to_string())
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Check a plain-text secret against this hash. Malformed hashes never verify.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored secret hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = SecretHash::hash("correct horse").unwrap();

        assert!(hash.verify("correct horse"));
        assert!(!hash.verify("battery staple"));
    }

    #[test]
    fn test_stored_hash_round_trip() {
        let stored = SecretHash::hash("s3cret").unwrap().into_string();
        assert!(SecretHash::from_stored(stored).verify("s3cret"));
    }

    #[test]
    fn test_same_secret_different_salts() {
        let a = SecretHash::hash("same-secret").unwrap();
        let b = SecretHash::hash("same-secret").unwrap();

        assert_ne!(a, b);
        assert!(a.verify("same-secret"));
        assert!(b.verify("same-secret"));
    }

    #[test]
    fn test_too_short_secret_rejected() {
        assert!(matches!(
            SecretHash::hash("ab"),
            Err(AppError::Validation(_))
        ));
        assert!(SecretHash::hash("abc").is_ok());
    }

    #[test]
    fn test_dummy_never_verifies() {
        let dummy = SecretHash::dummy();
        assert!(!dummy.verify(""));
        assert!(!dummy.verify("123"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let hash = SecretHash::hash("visible?").unwrap();
        assert_eq!(format!("{:?}", hash), "SecretHash([REDACTED])");
    }
}
