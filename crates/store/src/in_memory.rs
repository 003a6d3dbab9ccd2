//! In-memory collections for development and tests.
//!
//! `RwLock`'d maps behind the collection traits. Listings come back sorted
//! by id (UUIDv7, so time-ordered) to keep responses stable across calls.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use camphub_auth::Role;
use camphub_core::{CartId, ClassId, Email, PaymentId, UserId};

use crate::collections::{CartCollection, ClassCollection, PaymentCollection, UserCollection};
use crate::documents::{CartItemRecord, ClassDetails, ClassRecord, ClassStatus, PaymentRecord, UserRecord};
use crate::error::{StoreError, StoreResult};
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};

fn poisoned() -> StoreError {
    StoreError::unavailable("collection lock poisoned")
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryUsers {
    inner: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserCollection for InMemoryUsers {
    async fn insert_one(&self, user: UserRecord) -> StoreResult<InsertOneResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let id = user.id;
        map.insert(id, user);
        Ok(InsertOneResult::acknowledged(id))
    }

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<UserRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().find(|u| &u.email == email).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<UserRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut users: Vec<_> = map.values().cloned().collect();
        users.sort_by_key(|u| *u.id.as_uuid());
        Ok(users)
    }

    async fn find_by_role(&self, role: Role) -> StoreResult<Vec<UserRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut users: Vec<_> = map
            .values()
            .filter(|u| u.role == Some(role))
            .cloned()
            .collect();
        users.sort_by_key(|u| *u.id.as_uuid());
        Ok(users)
    }

    async fn set_role(&self, id: UserId, role: Role) -> StoreResult<UpdateResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        match map.get_mut(&id) {
            Some(user) if user.role == Some(role) => Ok(UpdateResult::unchanged()),
            Some(user) => {
                user.role = Some(role);
                Ok(UpdateResult::modified())
            }
            None => Ok(UpdateResult::zero_matches()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Classes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryClasses {
    inner: RwLock<HashMap<ClassId, ClassRecord>>,
}

impl InMemoryClasses {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClassCollection for InMemoryClasses {
    async fn insert_one(&self, class: ClassRecord) -> StoreResult<InsertOneResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let id = class.id;
        map.insert(id, class);
        Ok(InsertOneResult::acknowledged(id))
    }

    async fn find_all(&self) -> StoreResult<Vec<ClassRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut classes: Vec<_> = map.values().cloned().collect();
        classes.sort_by_key(|c| *c.id.as_uuid());
        Ok(classes)
    }

    async fn find_by_instructor(&self, email: &Email) -> StoreResult<Vec<ClassRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut classes: Vec<_> = map
            .values()
            .filter(|c| &c.instructor_email == email)
            .cloned()
            .collect();
        classes.sort_by_key(|c| *c.id.as_uuid());
        Ok(classes)
    }

    async fn find_by_status(&self, status: ClassStatus) -> StoreResult<Vec<ClassRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut classes: Vec<_> = map
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        classes.sort_by_key(|c| *c.id.as_uuid());
        Ok(classes)
    }

    async fn top_by_seats(&self, limit: usize) -> StoreResult<Vec<ClassRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut classes: Vec<_> = map.values().cloned().collect();
        classes.sort_by(|a, b| b.seats.cmp(&a.seats));
        classes.truncate(limit);
        Ok(classes)
    }

    async fn set_status(&self, id: ClassId, status: ClassStatus) -> StoreResult<UpdateResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        match map.get_mut(&id) {
            Some(class) if class.status == status => Ok(UpdateResult::unchanged()),
            Some(class) => {
                class.status = status;
                Ok(UpdateResult::modified())
            }
            None => Ok(UpdateResult::zero_matches()),
        }
    }

    async fn set_feedback(&self, id: ClassId, feedback: String) -> StoreResult<UpdateResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        match map.get_mut(&id) {
            Some(class) => {
                class.feedback = Some(feedback);
                Ok(UpdateResult::modified())
            }
            None => Ok(UpdateResult::zero_matches()),
        }
    }

    async fn replace_details(
        &self,
        id: ClassId,
        details: ClassDetails,
    ) -> StoreResult<UpdateResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        match map.get_mut(&id) {
            Some(class) => {
                class.class_name = details.class_name;
                class.class_image = details.class_image;
                class.seats = details.seats;
                class.price = details.price;
                Ok(UpdateResult::modified())
            }
            None => Ok(UpdateResult::zero_matches()),
        }
    }

    async fn delete_one(&self, id: ClassId) -> StoreResult<DeleteResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let removed = map.remove(&id).is_some();
        Ok(DeleteResult::deleted(removed as u64))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Carts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryCarts {
    inner: RwLock<HashMap<CartId, CartItemRecord>>,
}

impl InMemoryCarts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartCollection for InMemoryCarts {
    async fn insert_one(&self, item: CartItemRecord) -> StoreResult<InsertOneResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let id = item.id;
        map.insert(id, item);
        Ok(InsertOneResult::acknowledged(id))
    }

    async fn find_by_owner(&self, email: &Email) -> StoreResult<Vec<CartItemRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut items: Vec<_> = map
            .values()
            .filter(|i| &i.email == email)
            .cloned()
            .collect();
        items.sort_by_key(|i| *i.id.as_uuid());
        Ok(items)
    }

    async fn delete_one(&self, id: CartId) -> StoreResult<DeleteResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let removed = map.remove(&id).is_some();
        Ok(DeleteResult::deleted(removed as u64))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryPayments {
    inner: RwLock<HashMap<PaymentId, PaymentRecord>>,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentCollection for InMemoryPayments {
    async fn insert_one(&self, payment: PaymentRecord) -> StoreResult<InsertOneResult> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let id = payment.id;
        map.insert(id, payment);
        Ok(InsertOneResult::acknowledged(id))
    }

    async fn find_by_owner(&self, email: &Email) -> StoreResult<Vec<PaymentRecord>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut payments: Vec<_> = map
            .values()
            .filter(|p| &p.email == email)
            .cloned()
            .collect();
        payments.sort_by_key(|p| *p.id.as_uuid());
        Ok(payments)
    }
}
