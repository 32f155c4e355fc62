use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::account::models::Registration;
use crate::account::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// `POST /register`
///
/// Fields are accepted as-is, with no format or emptiness checks.
pub async fn register<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let user = state
        .account_service
        .register(Registration {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Json(RegisterResponse {
        user_id: user.id.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}
