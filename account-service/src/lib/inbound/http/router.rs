use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use credentials::TokenSigner;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::restricted::restricted_area;
use super::middleware::authenticate;
use crate::account::ports::UserRepository;
use crate::account::service::AccountService;

/// Shared request context. Everything in here is read-only after startup,
/// so cloning per request is just bumping reference counts.
pub struct AppState<R>
where
    R: UserRepository,
{
    pub account_service: Arc<AccountService<R>>,
    pub token_signer: Arc<TokenSigner>,
}

// Derived Clone would require R: Clone; the Arcs make that bound pointless.
impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
            token_signer: Arc::clone(&self.token_signer),
        }
    }
}

pub fn create_router<R>(
    account_service: Arc<AccountService<R>>,
    token_signer: Arc<TokenSigner>,
) -> Router
where
    R: UserRepository,
{
    let state = AppState {
        account_service,
        token_signer,
    };

    let public_routes = Router::new()
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>));

    let protected_routes = Router::new()
        .route("/restricted", get(restricted_area))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate::<R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
