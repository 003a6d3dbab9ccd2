//! Pure authorization policy checks.
//!
//! Both gates take already-loaded values and perform no IO:
//! - the Role Gate compares a stored role against the role an operation
//!   requires,
//! - the Ownership Gate compares the authenticated identity against the
//!   owner email a caller asked to read.
//!
//! Callers must run these **after** token verification; the `identity`
//! argument is only meaningful when it came out of a verified credential.

use thiserror::Error;

use camphub_core::Email;

use crate::roles::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: requires the {0} role")]
    RoleRequired(Role),

    #[error("forbidden: not the resource owner")]
    NotOwner,
}

/// Require that a stored role matches the role an operation demands.
///
/// `held` is the role loaded from the user record for the authenticated
/// identity, never a client-supplied value.
pub fn require_role(held: Option<Role>, required: Role) -> Result<(), AuthzError> {
    if held == Some(required) {
        Ok(())
    } else {
        Err(AuthzError::RoleRequired(required))
    }
}

/// Require that the authenticated identity owns the requested rows.
pub fn ensure_owner(identity: &Email, subject: &Email) -> Result<(), AuthzError> {
    if identity == subject {
        Ok(())
    } else {
        Err(AuthzError::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_role_match_is_required() {
        assert_eq!(require_role(Some(Role::Admin), Role::Admin), Ok(()));
        assert_eq!(
            require_role(Some(Role::Instructor), Role::Admin),
            Err(AuthzError::RoleRequired(Role::Admin))
        );
        // Admin does not imply Instructor.
        assert_eq!(
            require_role(Some(Role::Admin), Role::Instructor),
            Err(AuthzError::RoleRequired(Role::Instructor))
        );
    }

    #[test]
    fn missing_role_is_forbidden() {
        assert_eq!(
            require_role(None, Role::Admin),
            Err(AuthzError::RoleRequired(Role::Admin))
        );
    }

    #[test]
    fn owner_must_match_exactly() {
        let alice = Email::new("alice@camp.org").unwrap();
        let bob = Email::new("bob@camp.org").unwrap();

        assert_eq!(ensure_owner(&alice, &alice), Ok(()));
        assert_eq!(ensure_owner(&alice, &bob), Err(AuthzError::NotOwner));
    }

    #[test]
    fn ownership_ignores_email_case() {
        // Email normalization happens at parse time, so differently-cased
        // spellings of the same address still satisfy the gate.
        let lower = Email::new("carol@camp.org").unwrap();
        let upper = Email::new("CAROL@CAMP.ORG").unwrap();
        assert_eq!(ensure_owner(&lower, &upper), Ok(()));
    }
}
