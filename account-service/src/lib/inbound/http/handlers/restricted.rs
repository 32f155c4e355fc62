use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::middleware::AuthenticatedUser;

/// `GET /restricted`
///
/// Only reachable through the auth middleware, which puts the verified
/// identity in the request extensions.
pub async fn restricted_area(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<RestrictedAreaResponse> {
    Json(RestrictedAreaResponse {
        msg: format!(
            "Você está logado sob o ID {} e pode acessar esta rota",
            user.user_id
        ),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestrictedAreaResponse {
    pub msg: String,
}
