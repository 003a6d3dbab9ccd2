//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the long-lived service bundle (collections, token
//!   service, payment provider) built once at startup
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error envelopes

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String, payment_secret: String) -> Router {
    build_app_with(Arc::new(services::AppServices::in_memory(
        jwt_secret,
        payment_secret,
    )))
}

/// Build the router around an existing service bundle.
///
/// Tests use this to swap individual collections (e.g. a cart collection
/// that fails deletes) behind the same routing and middleware.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        verifier: services.token_verifier(),
    };

    // Protected routes: bearer credential required; role/ownership gates run
    // inside the handlers once the middleware has established an identity.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(protected)
        .layer(Extension(services))
}
