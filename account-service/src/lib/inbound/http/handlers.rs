use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::errors::AccountError;

pub mod login;
pub mod register;
pub mod restricted;

/// Failures that surface as HTTP error statuses.
///
/// Authentication-domain outcomes (unknown user, wrong password) are not
/// represented here: the wire contract carries those in a 200 body, so the
/// login handler renders them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    Conflict(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        (status, Json(json!({ "msg": message }))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::NotFound(_)
            | AccountError::InvalidCredentials
            | AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::RepositoryUnavailable(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}
