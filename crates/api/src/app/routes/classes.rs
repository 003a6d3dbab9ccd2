use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, put},
};

use camphub_core::{ClassId, Email};
use camphub_store::{ClassCollection, ClassDetails, ClassRecord, ClassStatus};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::IdentityContext;

/// `GET /popularClasses` returns at most this many rows.
const POPULAR_LIMIT: usize = 6;

pub fn public_router() -> Router {
    Router::new()
        .route("/classes", get(list_classes).post(create_class))
        .route("/approvedClasses", get(approved_classes))
        .route("/popularClasses", get(popular_classes))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/classes/:id", put(update_class).delete(delete_class))
        .route("/classes/approve/:id", patch(approve_class))
        .route("/classes/deny/:id", patch(deny_class))
        .route("/classes/feedback/:id", patch(attach_feedback))
}

/// GET /classes?instructorEmail= - all classes, or one instructor's.
///
/// An unparseable filter value matches nothing (empty array), the same as a
/// filter no stored document carries.
pub async fn list_classes(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ClassesQuery>,
) -> axum::response::Response {
    let result = match query.instructor_email.as_deref() {
        None => services.classes.find_all().await,
        Some(raw) => match Email::new(raw) {
            Ok(instructor) => services.classes.find_by_instructor(&instructor).await,
            Err(_) => Ok(Vec::new()),
        },
    };

    match result {
        Ok(classes) => (StatusCode::OK, Json(classes)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// POST /classes - submit a new class; it enters review as `pending`.
pub async fn create_class(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateClassRequest>,
) -> axum::response::Response {
    let instructor_email = match Email::new(&body.instructor_email) {
        Ok(email) => email,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    let record = ClassRecord {
        id: ClassId::new(),
        instructor_email,
        class_name: body.class_name,
        class_image: body.class_image,
        seats: body.seats,
        price: body.price,
        status: ClassStatus::Pending,
        feedback: None,
    };

    match services.classes.insert_one(record).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /approvedClasses - the classes students can actually book.
pub async fn approved_classes(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.classes.find_by_status(ClassStatus::Approved).await {
        Ok(classes) => (StatusCode::OK, Json(classes)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /popularClasses - top classes by seats, descending. Ties land in
/// whatever order the store returns them.
pub async fn popular_classes(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.classes.top_by_seats(POPULAR_LIMIT).await {
        Ok(classes) => (StatusCode::OK, Json(classes)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// PUT /classes/:id - replace the mutable field group (name, image, seats,
/// price). Instructor-gated.
pub async fn update_class(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateClassRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_instructor(&services, &identity).await {
        return errors::gate_error_to_response(e);
    }

    let id = match id.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    let details = ClassDetails {
        class_name: body.class_name,
        class_image: body.class_image,
        seats: body.seats,
        price: body.price,
    };

    match services.classes.replace_details(id, details).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// DELETE /classes/:id - withdraw a class. Instructor-gated.
pub async fn delete_class(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_instructor(&services, &identity).await {
        return errors::gate_error_to_response(e);
    }

    let id = match id.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    match services.classes.delete_one(id).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn approve_class(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    set_status(services, identity, id, ClassStatus::Approved).await
}

pub async fn deny_class(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    set_status(services, identity, id, ClassStatus::Denied).await
}

/// PATCH /classes/feedback/:id - attach review feedback, independent of the
/// status the class is in. Admin-gated.
pub async fn attach_feedback(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::FeedbackRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_admin(&services, &identity).await {
        return errors::gate_error_to_response(e);
    }

    let id = match id.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    match services.classes.set_feedback(id, body.feedback).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// PATCH /classes/{approve,deny}/:id - review decision. Admin-gated; a
/// missing id yields the zero-match update result.
async fn set_status(
    services: Arc<AppServices>,
    identity: IdentityContext,
    id: String,
    status: ClassStatus,
) -> axum::response::Response {
    if let Err(e) = authz::require_admin(&services, &identity).await {
        return errors::gate_error_to_response(e);
    }

    let id = match id.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    match services.classes.set_status(id, status).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
