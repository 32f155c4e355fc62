use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::account::errors::AccountError;
use crate::account::models::Credentials;
use crate::account::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// `POST /login`
///
/// Both failure outcomes render as HTTP 200 with a message and no token;
/// callers detect failure by the absence of the token field. The two
/// outcomes stay distinct variants internally.
pub async fn login<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = state
        .account_service
        .login(Credentials {
            email: body.email,
            password: body.password,
        })
        .await;

    let response = match outcome {
        Ok(token) => LoginResponse {
            msg: "Autenticado! :D".to_string(),
            token: Some(token),
        },
        Err(AccountError::NotFound(_)) => LoginResponse {
            msg: "Usuário não encontrado :(".to_string(),
            token: None,
        },
        Err(AccountError::InvalidCredentials) => LoginResponse {
            msg: "Senha incorreta :(".to_string(),
            token: None,
        },
        Err(e) => return Err(ApiError::from(e)),
    };

    Ok(Json(response))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub msg: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
