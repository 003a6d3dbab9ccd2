//! Email address value object.
//!
//! Emails are the ownership key of the whole system: user records are keyed
//! by email, and cart/payment rows are scoped to their owner's email. Two
//! addresses are equal only when their normalized forms match exactly.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated, normalized email address.
///
/// Normalization is trim + ASCII-lowercase. Comparison is exact after that;
/// no attempt is made to interpret provider-specific aliasing rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = raw.as_ref().trim().to_ascii_lowercase();

        // Minimal structural check: something on both sides of a single '@'.
        let mut parts = normalized.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(DomainError::validation(format!(
                "not a valid email address: {:?}",
                raw.as_ref()
            )));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
