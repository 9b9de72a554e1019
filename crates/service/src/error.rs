//! Typed error enum for the service layer.

use inquiry_desk_storage::StorageError;
use thiserror::Error;

/// Service-layer error wrapping the data-access boundary's failure modes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Boundary operation failed (not found, unavailable, corrupt data).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
