//! Role Gate: store-backed role requirements for protected operations.
//!
//! These checks depend on the identity the Token Verifier established, so
//! they can only run after the auth middleware; the `IdentityContext`
//! argument makes that ordering structural. The role always comes from the
//! stored user record, never from anything the client sent.

use thiserror::Error;

use camphub_auth::{AuthzError, Role, require_role};
use camphub_store::{StoreError, UserCollection};

use crate::app::services::AppServices;
use crate::context::IdentityContext;

#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Forbidden(#[from] AuthzError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Require the authenticated user's stored role to be Admin.
pub async fn require_admin(
    services: &AppServices,
    identity: &IdentityContext,
) -> Result<(), GateError> {
    require_stored_role(services, identity, Role::Admin).await
}

/// Require the authenticated user's stored role to be Instructor.
pub async fn require_instructor(
    services: &AppServices,
    identity: &IdentityContext,
) -> Result<(), GateError> {
    require_stored_role(services, identity, Role::Instructor).await
}

async fn require_stored_role(
    services: &AppServices,
    identity: &IdentityContext,
    required: Role,
) -> Result<(), GateError> {
    let user = services.users.find_by_email(identity.email()).await?;

    // An identity with no user record holds no role; the gate rejects it the
    // same way it rejects a role mismatch.
    require_role(user.and_then(|u| u.role), required)?;

    Ok(())
}
