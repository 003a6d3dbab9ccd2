use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use camphub_auth::Role;
use camphub_core::{Email, UserId};
use camphub_store::{UserCollection, UserRecord};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::IdentityContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/users", post(register_user))
        .route("/instructors", get(list_instructors))
        .route("/jwt", post(issue_token))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/users", get(list_users))
        // One registration per path shape: GET reads the segment as an email,
        // PATCH as a user id (the router allows only one param name per path).
        .route("/users/admin/:key", get(check_admin).patch(make_admin))
        .route(
            "/users/instructor/:key",
            get(check_instructor).patch(make_instructor),
        )
}

/// POST /users - register a user. Idempotent by email: re-registering
/// reports "user already exists" and leaves the stored record (and its
/// role) untouched.
pub async fn register_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterUserRequest>,
) -> axum::response::Response {
    let email = match Email::new(&body.email) {
        Ok(email) => email,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    let existing = match services.users.find_by_email(&email).await {
        Ok(existing) => existing,
        Err(e) => return errors::store_error_to_response(e),
    };
    if existing.is_some() {
        return (StatusCode::OK, Json(json!({ "message": "user already exists" }))).into_response();
    }

    match services.users.insert_one(UserRecord::new(email, body.name)).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /users - full user directory, admins only.
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_admin(&services, &identity).await {
        return errors::gate_error_to_response(e);
    }

    match services.users.find_all().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /instructors - public directory of users holding the Instructor role.
pub async fn list_instructors(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.users.find_by_role(Role::Instructor).await {
        Ok(instructors) => (StatusCode::OK, Json(instructors)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn make_admin(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(key): Path<String>,
) -> axum::response::Response {
    assign_role(services, identity, key, Role::Admin).await
}

pub async fn make_instructor(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(key): Path<String>,
) -> axum::response::Response {
    assign_role(services, identity, key, Role::Instructor).await
}

pub async fn check_admin(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(key): Path<String>,
) -> axum::response::Response {
    answer_role_probe(services, identity, key, Role::Admin, "admin").await
}

pub async fn check_instructor(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(key): Path<String>,
) -> axum::response::Response {
    answer_role_probe(services, identity, key, Role::Instructor, "instructor").await
}

/// POST /jwt - exchange a login's email for a bearer token (one-hour
/// expiry, enforced at verify time).
pub async fn issue_token(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::TokenRequest>,
) -> axum::response::Response {
    let email = match Email::new(&body.email) {
        Ok(email) => email,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    match services.tokens.issue(email, Utc::now()) {
        Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "token issuance failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "token issuance failed")
        }
    }
}

/// PATCH /users/{admin,instructor}/:id - replace one user's role field.
/// Admin-gated; a missing id yields the zero-match update result, not an
/// error.
async fn assign_role(
    services: Arc<AppServices>,
    identity: IdentityContext,
    key: String,
    role: Role,
) -> axum::response::Response {
    if let Err(e) = authz::require_admin(&services, &identity).await {
        return errors::gate_error_to_response(e);
    }

    let id = match key.parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    match services.users.set_role(id, role).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /users/{admin,instructor}/:email - answer whether the caller holds
/// the role. Probing an email other than the authenticated one answers
/// `false` rather than rejecting, so the client can probe without
/// special-casing 403s.
async fn answer_role_probe(
    services: Arc<AppServices>,
    identity: IdentityContext,
    key: String,
    role: Role,
    field: &'static str,
) -> axum::response::Response {
    let subject = match Email::new(&key) {
        Ok(subject) => subject,
        Err(_) => return (StatusCode::OK, Json(json!({ field: false }))).into_response(),
    };

    if &subject != identity.email() {
        return (StatusCode::OK, Json(json!({ field: false }))).into_response();
    }

    let holds = match services.users.find_by_email(&subject).await {
        Ok(user) => user.and_then(|u| u.role) == Some(role),
        Err(e) => return errors::store_error_to_response(e),
    };

    (StatusCode::OK, Json(json!({ field: holds }))).into_response()
}
