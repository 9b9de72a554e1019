use thiserror::Error;

/// Errors produced by the core domain types.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unknown inquiry status: {0}")]
    InvalidStatus(String),

    #[error("unknown inquiry priority: {0}")]
    InvalidPriority(String),

    #[error("unknown inquiry type: {0}")]
    InvalidInquiryType(String),

    #[error("unknown sort field: {0}")]
    InvalidSortField(String),

    #[error("unknown sort order: {0}")]
    InvalidSortOrder(String),

    /// Status counts must sum to the total — the status enum is exhaustive
    /// and every record carries exactly one status.
    #[error("inconsistent stats: status counts sum to {sum} but total is {total}")]
    InconsistentStats { total: u64, sum: u64 },
}
