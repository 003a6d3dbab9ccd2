//! `camphub-payments` — payment-provider boundary.
//!
//! Checkout needs exactly one thing from the provider: a payment intent
//! whose `client_secret` the web client can use to confirm the charge. The
//! provider itself is an external collaborator, so this crate defines the
//! seam plus a deterministic dev implementation; a real HTTP-backed provider
//! slots in behind the same trait.

pub mod provider;

pub use provider::{DevPaymentProvider, PaymentError, PaymentIntent, PaymentProvider};
