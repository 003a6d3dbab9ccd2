//! Collection traits: the seam to the backing document store.
//!
//! One trait per collection (`users`, `classes`, `carts`, `payments`).
//! Methods correspond to the query objects handlers build; none of them
//! encode authorization.

use async_trait::async_trait;

use camphub_auth::Role;
use camphub_core::{CartId, ClassId, Email, UserId};

use crate::documents::{CartItemRecord, ClassDetails, ClassRecord, ClassStatus, PaymentRecord, UserRecord};
use crate::error::StoreResult;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};

#[async_trait]
pub trait UserCollection: Send + Sync {
    async fn insert_one(&self, user: UserRecord) -> StoreResult<InsertOneResult>;

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<UserRecord>>;

    async fn find_all(&self) -> StoreResult<Vec<UserRecord>>;

    async fn find_by_role(&self, role: Role) -> StoreResult<Vec<UserRecord>>;

    /// Replace the role field of one user. Zero-match result when `id` does
    /// not exist.
    async fn set_role(&self, id: UserId, role: Role) -> StoreResult<UpdateResult>;
}

#[async_trait]
pub trait ClassCollection: Send + Sync {
    async fn insert_one(&self, class: ClassRecord) -> StoreResult<InsertOneResult>;

    async fn find_all(&self) -> StoreResult<Vec<ClassRecord>>;

    async fn find_by_instructor(&self, email: &Email) -> StoreResult<Vec<ClassRecord>>;

    async fn find_by_status(&self, status: ClassStatus) -> StoreResult<Vec<ClassRecord>>;

    /// Classes ordered by available seats, descending, at most `limit` rows.
    /// Ties may come back in any order.
    async fn top_by_seats(&self, limit: usize) -> StoreResult<Vec<ClassRecord>>;

    async fn set_status(&self, id: ClassId, status: ClassStatus) -> StoreResult<UpdateResult>;

    async fn set_feedback(&self, id: ClassId, feedback: String) -> StoreResult<UpdateResult>;

    /// Replace the mutable field group (name, image, seats, price) as one
    /// unit. Zero-match result when `id` does not exist.
    async fn replace_details(&self, id: ClassId, details: ClassDetails)
        -> StoreResult<UpdateResult>;

    async fn delete_one(&self, id: ClassId) -> StoreResult<DeleteResult>;
}

#[async_trait]
pub trait CartCollection: Send + Sync {
    async fn insert_one(&self, item: CartItemRecord) -> StoreResult<InsertOneResult>;

    async fn find_by_owner(&self, email: &Email) -> StoreResult<Vec<CartItemRecord>>;

    async fn delete_one(&self, id: CartId) -> StoreResult<DeleteResult>;
}

#[async_trait]
pub trait PaymentCollection: Send + Sync {
    async fn insert_one(&self, payment: PaymentRecord) -> StoreResult<InsertOneResult>;

    async fn find_by_owner(&self, email: &Email) -> StoreResult<Vec<PaymentRecord>>;
}
