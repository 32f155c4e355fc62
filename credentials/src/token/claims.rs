use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token lifetime in seconds. Policy constant, not configurable per call.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Claims carried by an access token.
///
/// The token is self-contained: identity (`sub`) plus expiry is all the
/// server needs at verification time, so nothing is persisted per token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id the token was issued for
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject, expiring [`TOKEN_TTL_SECS`] from now.
    pub fn for_subject(subject: impl ToString) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: subject.to_string(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        }
    }
}
