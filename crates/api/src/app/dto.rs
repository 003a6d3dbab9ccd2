//! Request DTOs.
//!
//! Wire names are camelCase to match what the web client sends; bodies are
//! deserialized as-is and validated in the handlers (malformed emails and
//! ids map to 400 before any store call).

use serde::Deserialize;

// -------------------------
// Identity
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: String,
}

/// Body of `POST /jwt`: the login flow exchanges a verified email for a
/// bearer token.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

// -------------------------
// Classes
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub instructor_email: String,
    pub class_name: String,
    pub class_image: String,
    pub seats: u32,
    pub price: f64,
}

/// The mutable field group of a class, replaced as one unit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    pub class_name: String,
    pub class_image: String,
    pub seats: u32,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesQuery {
    pub instructor_email: Option<String>,
}

// -------------------------
// Carts & payments
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub email: String,
    pub class_id: String,
    pub class_name: String,
    pub price: f64,
}

/// Owner-scoped list queries (`GET /carts`, `GET /enrolled`).
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub email: String,
    pub cart_id: String,
    pub class_id: String,
    pub class_name: String,
    pub amount: f64,
    pub transaction_id: String,
}
