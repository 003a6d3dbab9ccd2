//! Driver-style operation results.
//!
//! Handlers return these to callers unmodified, mirroring the raw result
//! objects a document-store driver produces (`acknowledged`, match/modify
//! counts). Callers use the counts to distinguish "updated" from "no such
//! row"; a zero-match update is a normal outcome, not an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a single-document insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertOneResult {
    pub fn acknowledged(inserted_id: impl Into<Uuid>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.into(),
        }
    }
}

/// Result of a single-document update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn modified() -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
        }
    }

    /// The filter matched but the document already held the target value.
    pub fn unchanged() -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: 0,
        }
    }

    /// The filter matched nothing; the call is a silent no-op.
    pub fn zero_matches() -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
        }
    }
}

/// Result of a single-document delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn deleted(count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: count,
        }
    }
}
