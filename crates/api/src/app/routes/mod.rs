use axum::Router;

pub mod carts;
pub mod classes;
pub mod payments;
pub mod system;
pub mod users;

/// Router for the open endpoints (no credential required).
pub fn public_router() -> Router {
    Router::new()
        .merge(users::public_router())
        .merge(classes::public_router())
        .merge(carts::public_router())
}

/// Router for all token-protected endpoints. The auth middleware is layered
/// on by `app::build_app_with`; role and ownership gates run per handler.
pub fn protected_router() -> Router {
    Router::new()
        .merge(users::protected_router())
        .merge(classes::protected_router())
        .merge(carts::protected_router())
        .merge(payments::protected_router())
}
