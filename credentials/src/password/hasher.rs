use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way password hasher.
///
/// Wraps Argon2id with the crate's default cost parameters. Every call to
/// [`hash`](CredentialHasher::hash) draws a fresh random salt; the returned
/// PHC string carries algorithm, cost, salt, and digest, so verification
/// needs no state beyond the string itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying derivation failed (entropy or
    ///   parameter error); callers should treat this as fatal.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored PHC string.
    ///
    /// Recomputes the hash with the salt and cost embedded in `encoded` and
    /// compares in constant time. A mismatch is `Ok(false)`, never an error.
    ///
    /// # Errors
    /// * `InvalidHash` - `encoded` is not a parseable PHC string.
    pub fn verify(&self, password: &str, encoded: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(encoded).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = CredentialHasher::new();

        let encoded = hasher.hash("senha123").expect("Failed to hash password");

        assert_ne!(encoded, "senha123");
        assert!(hasher
            .verify("senha123", &encoded)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("senha errada", &encoded)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = CredentialHasher::new();

        let first = hasher.hash("senha123").expect("Failed to hash password");
        let second = hasher.hash("senha123").expect("Failed to hash password");

        // Fresh salt per call: different encodings, both verify
        assert_ne!(first, second);
        assert!(hasher.verify("senha123", &first).unwrap());
        assert!(hasher.verify("senha123", &second).unwrap());
    }

    #[test]
    fn test_encoding_embeds_parameters() {
        let hasher = CredentialHasher::new();

        let encoded = hasher.hash("senha123").expect("Failed to hash password");

        assert!(encoded.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_rejects_invalid_encoding() {
        let hasher = CredentialHasher::new();

        let result = hasher.verify("senha123", "not-a-phc-string");

        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }
}
