use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use camphub_payments::PaymentError;
use camphub_store::StoreError;

use crate::authz::GateError;

/// The one reject envelope: a boolean error flag plus a human-readable
/// message, so the web client can branch on `error` without inspecting
/// status codes.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": true,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn unauthenticated(message: &str) -> axum::response::Response {
    json_error(StatusCode::UNAUTHORIZED, message)
}

pub fn forbidden() -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "forbidden")
}

pub fn bad_request(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, message)
}

pub fn gate_error_to_response(err: GateError) -> axum::response::Response {
    match err {
        GateError::Forbidden(_) => forbidden(),
        GateError::Store(e) => store_error_to_response(e),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "upstream store failure")
}

pub fn payment_error_to_response(err: PaymentError) -> axum::response::Response {
    match err {
        PaymentError::InvalidAmount(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        PaymentError::Provider(msg) => {
            tracing::error!(error = %msg, "payment provider call failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "payment provider failure")
        }
    }
}
