use std::sync::Arc;

use camphub_auth::{Hs256TokenService, TokenVerifier};
use camphub_payments::{DevPaymentProvider, PaymentProvider};
use camphub_store::{
    CartCollection, ClassCollection, InMemoryCarts, InMemoryClasses, InMemoryPayments,
    InMemoryUsers, PaymentCollection, UserCollection,
};

/// Long-lived service bundle: the store handle, token service and payment
/// provider the whole process shares. Built once at startup; every field is
/// safe for unlimited concurrent use.
#[derive(Clone)]
pub struct AppServices {
    pub tokens: Arc<Hs256TokenService>,
    pub users: Arc<dyn UserCollection>,
    pub classes: Arc<dyn ClassCollection>,
    pub carts: Arc<dyn CartCollection>,
    pub payments: Arc<dyn PaymentCollection>,
    pub payment_provider: Arc<dyn PaymentProvider>,
}

impl AppServices {
    /// In-memory bundle for dev and tests. Each call owns isolated
    /// collections; nothing is process-global.
    pub fn in_memory(jwt_secret: String, payment_secret: String) -> Self {
        Self {
            tokens: Arc::new(Hs256TokenService::new(jwt_secret.as_bytes())),
            users: Arc::new(InMemoryUsers::new()),
            classes: Arc::new(InMemoryClasses::new()),
            carts: Arc::new(InMemoryCarts::new()),
            payments: Arc::new(InMemoryPayments::new()),
            payment_provider: Arc::new(DevPaymentProvider::new(payment_secret)),
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        self.tokens.clone()
    }
}
