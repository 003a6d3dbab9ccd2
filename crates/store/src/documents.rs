//! Document shapes stored in each collection.
//!
//! Wire names are camelCase to match the documents the web client reads and
//! writes; Rust field names stay idiomatic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use camphub_auth::Role;
use camphub_core::{CartId, ClassId, Email, PaymentId, UserId};

/// A registered user. Keyed by email; `role` is absent for ordinary students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserRecord {
    pub fn new(email: Email, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email,
            name: name.into(),
            role: None,
        }
    }
}

/// Review status of a submitted class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

/// A camp class offered by an instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub id: ClassId,
    pub instructor_email: Email,
    pub class_name: String,
    pub class_image: String,
    pub seats: u32,
    pub price: f64,
    pub status: ClassStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// The mutable field group of a class, replaced as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDetails {
    pub class_name: String,
    pub class_image: String,
    pub seats: u32,
    pub price: f64,
}

/// A class a student put in their cart (class snapshot carried alongside the
/// reference, the way the web client stores the selection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRecord {
    pub id: CartId,
    pub email: Email,
    pub class_id: ClassId,
    pub class_name: String,
    pub price: f64,
}

/// A completed payment; doubles as the enrollment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub email: Email,
    pub cart_id: CartId,
    pub class_id: ClassId,
    pub class_name: String,
    pub amount: f64,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}
