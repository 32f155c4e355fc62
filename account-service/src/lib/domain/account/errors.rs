use credentials::PasswordError;
use credentials::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for account operations.
///
/// `NotFound` and `InvalidCredentials` are distinct on purpose even though
/// the HTTP layer renders them as similarly generic text.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("User not found for email: {0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Repository unavailable: {0}")]
    RepositoryUnavailable(String),
}
