//! `camphub-store` — document-store boundary.
//!
//! The backing document database is an external collaborator, so this crate
//! only defines the seam: one trait per collection, driver-style result
//! objects that handlers return to callers verbatim, and an in-memory
//! implementation for development and tests. Collections enforce no
//! authorization of their own; ownership and role checks happen in the API
//! layer before a collection call is made.

pub mod collections;
pub mod documents;
pub mod error;
pub mod in_memory;
pub mod results;

pub use collections::{CartCollection, ClassCollection, PaymentCollection, UserCollection};
pub use documents::{
    CartItemRecord, ClassDetails, ClassRecord, ClassStatus, PaymentRecord, UserRecord,
};
pub use error::{StoreError, StoreResult};
pub use in_memory::{InMemoryCarts, InMemoryClasses, InMemoryPayments, InMemoryUsers};
pub use results::{DeleteResult, InsertOneResult, UpdateResult};
