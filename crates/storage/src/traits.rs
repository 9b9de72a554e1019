use async_trait::async_trait;
use inquiry_desk_core::{FilterCriteria, Inquiry, InquiryStats, Page};

use crate::error::StorageError;

/// The data-access boundary the admin list view calls through.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Fetch one page of inquiries matching the criteria, server-side
    /// filtered, sorted, and truncated. Read-only.
    async fn fetch_page(&self, criteria: &FilterCriteria) -> Result<Page<Inquiry>, StorageError>;

    /// Fetch collection-wide counts by status. Intentionally takes no
    /// criteria: the summary always reflects the whole collection.
    async fn fetch_stats(&self) -> Result<InquiryStats, StorageError>;

    /// Delete one inquiry, irreversibly. Unknown or already-deleted ids
    /// are `StorageError::NotFound`.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}
