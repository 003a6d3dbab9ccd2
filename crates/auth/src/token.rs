//! HS256 token issuance and verification.
//!
//! Issuance and verification share one signing secret and one algorithm; a
//! token minted by [`Hs256TokenService::issue`] is accepted by the same
//! service's [`TokenVerifier::verify`] until its `expires_at` passes. Expiry
//! is enforced at verify time only; issuance just stamps the window.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use camphub_core::Email;

use crate::claims::{AccessClaims, TokenValidationError, validate_claims};

/// Default token lifetime: one hour.
const DEFAULT_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// The token could not be decoded or its signature did not verify.
    #[error("credential invalid: {0}")]
    Decode(#[from] jsonwebtoken::errors::Error),

    /// The token decoded fine but its claims are outside the validity window.
    #[error("credential invalid: {0}")]
    Claims(#[from] TokenValidationError),
}

/// Verification seam used by the HTTP middleware.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, CredentialError>;
}

/// HS256 token service: issues and verifies with the same shared secret.
pub struct Hs256TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256TokenService {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(DEFAULT_TTL_SECONDS),
        }
    }

    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        Self {
            ttl,
            ..Self::new(secret)
        }
    }

    /// Sign an access token for `email`, valid from `now` for the configured
    /// lifetime.
    pub fn issue(&self, email: Email, now: DateTime<Utc>) -> Result<String, CredentialError> {
        let claims = AccessClaims {
            sub: email,
            issued_at: now,
            expires_at: now + self.ttl,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }
}

impl TokenVerifier for Hs256TokenService {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, CredentialError> {
        // Signature/shape checks only; the validity window lives in our own
        // claims and is checked deterministically below.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let decoded = decode::<AccessClaims>(token, &self.decoding, &validation)?;
        validate_claims(&decoded.claims, now)?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Hs256TokenService {
        Hs256TokenService::new(b"test-secret")
    }

    fn email() -> Email {
        Email::new("student@camp.org").unwrap()
    }

    #[test]
    fn issued_tokens_verify_back_to_the_same_subject() {
        let svc = service();
        let now = Utc::now();

        let token = svc.issue(email(), now).unwrap();
        let claims = svc.verify(&token, now).unwrap();

        assert_eq!(claims.sub, email());
        assert_eq!(claims.expires_at - claims.issued_at, svc.ttl);
    }

    #[test]
    fn expiry_is_enforced_at_verify_time() {
        let svc = service();
        let issued = Utc::now();
        let token = svc.issue(email(), issued).unwrap();

        // Two hours later the one-hour token is dead.
        let later = issued + Duration::hours(2);
        let err = svc.verify(&token, later).unwrap_err();
        assert!(matches!(
            err,
            CredentialError::Claims(TokenValidationError::Expired)
        ));
    }

    #[test]
    fn tokens_signed_with_a_different_secret_are_rejected() {
        let now = Utc::now();
        let token = Hs256TokenService::new(b"other-secret")
            .issue(email(), now)
            .unwrap();

        assert!(matches!(
            service().verify(&token, now),
            Err(CredentialError::Decode(_))
        ));
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let now = Utc::now();
        assert!(matches!(
            service().verify("not.a.token", now),
            Err(CredentialError::Decode(_))
        ));
        assert!(matches!(
            service().verify("", now),
            Err(CredentialError::Decode(_))
        ));
    }

    #[test]
    fn tampered_payloads_fail_signature_verification() {
        let svc = service();
        let now = Utc::now();
        let token = svc.issue(email(), now).unwrap();

        // Swap the payload segment for a different (valid base64) one.
        let mut parts: Vec<&str> = token.split('.').collect();
        let other = svc
            .issue(Email::new("intruder@camp.org").unwrap(), now)
            .unwrap();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let forged = parts.join(".");

        if forged != other {
            assert!(matches!(
                svc.verify(&forged, now),
                Err(CredentialError::Decode(_))
            ));
        }
    }
}
