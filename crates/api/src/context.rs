use camphub_core::Email;

/// Authenticated identity for a request.
///
/// Inserted into request extensions by the auth middleware after the bearer
/// credential verifies; its presence is the proof that the Token Verifier
/// ran. Role and ownership gates key off this, never off client-supplied
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    email: Email,
}

impl IdentityContext {
    pub fn new(email: Email) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
