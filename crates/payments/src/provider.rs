use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Amounts are in the currency's minor unit (cents for USD), the way
/// payment providers expect them on the wire.
pub type MinorUnits = u64;

/// A created payment intent. Only `client_secret` ever leaves the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: MinorUnits,
    pub currency: &'static str,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    /// Amounts the provider would refuse (zero, or beyond its cap).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The provider call itself failed.
    #[error("payment provider error: {0}")]
    Provider(String),
}

/// Seam to the payment provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_intent(&self, amount: MinorUnits) -> Result<PaymentIntent, PaymentError>;
}

/// Providers commonly cap single charges around this; the dev provider
/// mirrors the limit so oversized carts fail the same way in every
/// environment.
const MAX_AMOUNT: MinorUnits = 99_999_999;

/// Deterministic in-process provider for development and tests.
///
/// Mints intents in the provider's id shape (`pi_<nonce>` plus a
/// `<id>_secret_<nonce>` client secret) without any network traffic. The
/// configured secret is unused beyond construction; it stands in for the
/// API key a real provider implementation would sign requests with.
pub struct DevPaymentProvider {
    _secret: String,
}

impl DevPaymentProvider {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            _secret: secret.into(),
        }
    }
}

#[async_trait]
impl PaymentProvider for DevPaymentProvider {
    async fn create_intent(&self, amount: MinorUnits) -> Result<PaymentIntent, PaymentError> {
        if amount == 0 {
            return Err(PaymentError::InvalidAmount("amount must be positive".into()));
        }
        if amount > MAX_AMOUNT {
            return Err(PaymentError::InvalidAmount(format!(
                "amount {amount} exceeds the provider maximum {MAX_AMOUNT}"
            )));
        }

        let id = format!("pi_{}", Uuid::now_v7().simple());
        let client_secret = format!("{}_secret_{}", id, Uuid::now_v7().simple());

        Ok(PaymentIntent {
            id,
            client_secret,
            amount,
            currency: "usd",
        })
    }
}
