//! Shared constants for inquiry-desk.

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum page size for any query (DoS protection).
pub const MAX_PAGE_SIZE: u64 = 100;
