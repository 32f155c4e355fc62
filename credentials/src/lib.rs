//! Credential primitives for the account service
//!
//! Provides the two building blocks of the authentication protocol:
//! - Password hashing (Argon2id, salted, tunable work factor)
//! - Signed, expiring bearer tokens (HS256 JWT)
//!
//! The service layer composes these; this crate holds no state beyond the
//! signing keys and knows nothing about users or storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::CredentialHasher;
//!
//! let hasher = CredentialHasher::new();
//! let encoded = hasher.hash("senha123").unwrap();
//! assert!(hasher.verify("senha123", &encoded).unwrap());
//! assert!(!hasher.verify("senha errada", &encoded).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use credentials::TokenSigner;
//!
//! let signer = TokenSigner::new(b"secret_key_at_least_32_bytes_long!");
//! let token = signer.issue("user-id").unwrap();
//! let claims = signer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user-id");
//! ```

pub mod password;
pub mod token;

pub use password::CredentialHasher;
pub use password::PasswordError;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenSigner;
pub use token::TOKEN_TTL_SECS;
