use std::sync::Arc;

use axum::{extract::State, http::header, middleware::Next, response::Response};
use chrono::Utc;

use camphub_auth::TokenVerifier;

use crate::app::errors;
use crate::context::IdentityContext;

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Token Verifier gate: every protected route passes through here first.
///
/// On success the request carries an [`IdentityContext`]; downstream gates
/// (role, ownership) read the identity from there.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(header) = req.headers().get(header::AUTHORIZATION) else {
        return Err(errors::unauthenticated("no credential supplied"));
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| errors::unauthenticated("credential invalid"))?;

    let claims = state.verifier.verify(token, Utc::now()).map_err(|e| {
        tracing::warn!(error = %e, "rejected bearer credential");
        errors::unauthenticated("credential invalid")
    })?;

    req.extensions_mut().insert(IdentityContext::new(claims.sub));

    Ok(next.run(req).await)
}
