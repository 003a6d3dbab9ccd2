use thiserror::Error;

/// Result type for collection operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure talking to the backing document store.
///
/// There is exactly one shape on purpose: callers never retry or branch on
/// store failures, they surface them as an upstream error and move on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
