use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use camphub_auth::ensure_owner;
use camphub_core::{CartId, ClassId, Email, PaymentId};
use camphub_payments::PaymentProvider;
use camphub_store::{CartCollection, PaymentCollection, PaymentRecord, StoreError};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::IdentityContext;

pub fn protected_router() -> Router {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payments", post(submit_payment))
        .route("/enrolled", get(enrolled_classes))
}

/// POST /create-payment-intent - ask the provider for an intent covering
/// the given price; only the `clientSecret` goes back to the client.
pub async fn create_payment_intent(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateIntentRequest>,
) -> axum::response::Response {
    if !body.price.is_finite() || body.price <= 0.0 {
        return errors::bad_request("price must be a positive number");
    }
    let amount = (body.price * 100.0).round() as u64;

    match services.payment_provider.create_intent(amount).await {
        Ok(intent) => (
            StatusCode::OK,
            Json(json!({ "clientSecret": intent.client_secret })),
        )
            .into_response(),
        Err(e) => errors::payment_error_to_response(e),
    }
}

/// POST /payments - record a confirmed payment, then clear the cart item it
/// covers.
///
/// The two writes are deliberately ordered and not atomic: the payment is
/// inserted first, and a failed cart deletion leaves an orphaned cart row
/// rather than ever dropping a recorded payment.
pub async fn submit_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CheckoutRequest>,
) -> axum::response::Response {
    let email = match Email::new(&body.email) {
        Ok(email) => email,
        Err(e) => return errors::bad_request(e.to_string()),
    };
    let cart_id = match body.cart_id.parse::<CartId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };
    let class_id = match body.class_id.parse::<ClassId>() {
        Ok(id) => id,
        Err(e) => return errors::bad_request(e.to_string()),
    };

    let record = PaymentRecord {
        id: PaymentId::new(),
        email,
        cart_id,
        class_id,
        class_name: body.class_name,
        amount: body.amount,
        transaction_id: body.transaction_id,
        created_at: Utc::now(),
    };

    let insert_result = match services.payments.insert_one(record).await {
        Ok(result) => result,
        Err(e) => return errors::store_error_to_response(e),
    };

    match services.carts.delete_one(cart_id).await {
        Ok(delete_result) => (
            StatusCode::OK,
            Json(json!({
                "insertResult": insert_result,
                "deleteResult": delete_result,
            })),
        )
            .into_response(),
        Err(e) => payment_retained_response(cart_id, e),
    }
}

/// GET /enrolled?email= - the caller's payment (enrollment) records,
/// ownership-gated. Absent parameter degrades to an empty result set.
pub async fn enrolled_classes(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<IdentityContext>,
    Query(query): Query<dto::OwnerQuery>,
) -> axum::response::Response {
    let Some(raw) = query.email.as_deref() else {
        return (StatusCode::OK, Json(Vec::<PaymentRecord>::new())).into_response();
    };

    let Ok(subject) = Email::new(raw) else {
        return errors::forbidden();
    };
    if ensure_owner(identity.email(), &subject).is_err() {
        return errors::forbidden();
    }

    match services.payments.find_by_owner(&subject).await {
        Ok(payments) => (StatusCode::OK, Json(payments)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn payment_retained_response(cart_id: CartId, err: StoreError) -> axum::response::Response {
    // The payment row is already in; only the cart cleanup failed.
    tracing::error!(
        error = %err,
        cart_id = %cart_id,
        "cart cleanup failed after payment insert; payment retained, cart row orphaned"
    );
    errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "upstream store failure")
}
