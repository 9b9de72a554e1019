//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, transient backend
//! failure, corrupt data) instead of downcasting opaque boxes.

use inquiry_desk_core::CoreError;
use thiserror::Error;

/// Storage-layer error covering every expected failure mode of the
/// data-access boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Record not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Network / server failure on the boundary. Transient: the next
    /// user-triggered fetch retries.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Record data could not be validated into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Enum validation failures at the boundary are data corruption, not user
/// errors: unknown status/priority values must be rejected here, never
/// defaulted silently.
impl From<CoreError> for StorageError {
    fn from(err: CoreError) -> Self {
        Self::DataCorruption {
            context: "inquiry record failed domain validation".to_owned(),
            source: Box::new(err),
        }
    }
}
