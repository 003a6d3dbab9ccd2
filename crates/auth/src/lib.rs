//! `camphub-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: claims are a
//! plain serde model, token issue/verify operates on strings and a shared
//! secret, and the role/ownership policy checks take already-loaded values.
//! The HTTP layer decides *when* each gate runs; this crate decides *what*
//! each gate means.

pub mod claims;
pub mod policy;
pub mod roles;
pub mod token;

pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use policy::{AuthzError, ensure_owner, require_role};
pub use roles::Role;
pub use token::{CredentialError, Hs256TokenService, TokenVerifier};
