use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::models::UserId;
use crate::account::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// Verified identity, inserted into request extensions for downstream
/// handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Bearer-token gate for protected routes.
///
/// Exactly one of reject / forward happens per request: a missing or
/// unverifiable token short-circuits here with a rejection response, and a
/// verified one forwards to the next stage with the identity attached.
pub async fn authenticate<R: UserRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.token_signer.verify(token).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected bearer token");
        reject("token inválido")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        // A verified signature with an unparseable subject means a token we
        // never issued in this form
        tracing::error!(reason = %e, "Verified token carried an invalid subject");
        reject("token inválido")
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| reject("token não encontrado"))?;

    let header = header
        .to_str()
        .map_err(|_| reject("token não encontrado"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| reject("token não encontrado"))?;

    if token.is_empty() {
        return Err(reject("token não encontrado"));
    }

    Ok(token)
}

fn reject(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "msg": message }))).into_response()
}
