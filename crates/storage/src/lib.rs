//! Data-access boundary for inquiry-desk.
//!
//! The [`InquiryStore`] trait is the seam the service layer calls through:
//! one paged read, one filter-independent stats read, one delete. The
//! in-memory [`MemoryStore`] is the reference implementation of the query
//! semantics and doubles as the backend for tests and the demo server.

mod error;
mod memory;
#[cfg(test)]
mod tests;
mod traits;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use traits::InquiryStore;
