use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};

use camphub_auth::ensure_owner;
use camphub_core::{CartId, ClassId, Email};
use camphub_store::{CartCollection, CartItemRecord};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::IdentityContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/carts", post(add_to_cart))
        .route("/selectedClasses/:id", delete(remove_selected))
}

pub fn protected_router() -> Router {
    Router::new().route("/carts", get(my_cart))
}

/// POST /carts - put a class in a student's cart (class snapshot carried
/// in the item, the way the web client sends it).
pub async fn add_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddToCartRequest>,
) -> axum::response::Response {
    let email = match Email::new(&body.email) {
        Ok(email) => email,
        Err(e) => return errors::bad_request(e.to_string()),
    };
    let class_id = match body.class_id.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    let item = CartItemRecord {
        id: CartId::new(),
        email,
        class_id,
        class_name: body.class_name,
        price: body.price,
    };

    match services.carts.insert_one(item).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /carts?email= - the caller's cart, ownership-gated.
///
/// No `email` parameter degrades to an empty result set rather than a
/// rejection (see the note in DESIGN.md).
pub async fn my_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Query(query): Query<dto::OwnerQuery>,
) -> axum::response::Response {
    let Some(raw) = query.email.as_deref() else {
        return (StatusCode::OK, Json(Vec::<CartItemRecord>::new())).into_response();
    };

    // A subject that does not even parse as an email cannot be the verified
    // identity, so it fails the gate the same way a mismatch does.
    let Ok(subject) = Email::new(raw) else {
        return errors::forbidden();
    };
    if ensure_owner(identity.email(), &subject).is_err() {
        return errors::forbidden();
    }

    match services.carts.find_by_owner(&subject).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// DELETE /selectedClasses/:id - drop one item out of a cart.
pub async fn remove_selected(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match id.parse::<CartId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    match services.carts.delete_one(id).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
