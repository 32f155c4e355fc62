use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are deliberately split three ways so callers can
/// tell a stale token from a forged or garbled one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is expired")]
    Expired,

    #[error("Token signature does not match the signing key")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}
