//! In-memory inquiry store.
//!
//! Reference implementation of the boundary semantics: case-insensitive
//! substring search, equality filters, rank-based priority sort, stable
//! tie-breaks, and server-side pagination.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use inquiry_desk_core::{
    FilterCriteria, Inquiry, InquiryStats, InquiryStatus, Page, PageInfo, SortField, SortOrder,
};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::InquiryStore;

/// Thread-safe in-memory collection of inquiries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<Inquiry>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records.
    #[must_use]
    pub fn seeded(records: Vec<Inquiry>) -> Self {
        Self { records: Arc::new(RwLock::new(records)) }
    }

    pub async fn insert(&self, inquiry: Inquiry) {
        self.records.write().await.push(inquiry);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn matches(inquiry: &Inquiry, criteria: &FilterCriteria) -> bool {
    if let Some(status) = criteria.status {
        if inquiry.status != status {
            return false;
        }
    }
    if let Some(priority) = criteria.priority {
        if inquiry.priority != priority {
            return false;
        }
    }
    if let Some(inquiry_type) = criteria.inquiry_type {
        if inquiry.inquiry_type != inquiry_type {
            return false;
        }
    }
    if let Some(search) = criteria.search.as_deref() {
        let needle = search.to_lowercase();
        let haystacks = [
            Some(inquiry.name.as_str()),
            Some(inquiry.email.as_str()),
            Some(inquiry.subject.as_str()),
            Some(inquiry.message.as_str()),
            inquiry.company.as_deref(),
        ];
        if !haystacks
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
        {
            return false;
        }
    }
    true
}

/// Direction flips the primary comparison only; the tie-break (newest
/// first, then id) stays fixed so pagination is stable.
fn compare(a: &Inquiry, b: &Inquiry, sort_by: SortField, sort_order: SortOrder) -> Ordering {
    let primary = match sort_by {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
    };
    let primary = match sort_order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    primary
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl InquiryStore for MemoryStore {
    async fn fetch_page(&self, criteria: &FilterCriteria) -> Result<Page<Inquiry>, StorageError> {
        let criteria = criteria.clone().normalized();
        let records = self.records.read().await;

        let mut matched: Vec<Inquiry> =
            records.iter().filter(|inquiry| matches(inquiry, &criteria)).cloned().collect();
        drop(records);

        matched.sort_by(|a, b| compare(a, b, criteria.sort_by, criteria.sort_order));

        let total_items = matched.len() as u64;
        let info = PageInfo::from_counts(criteria.page, criteria.per_page, total_items);

        let offset = (criteria.page - 1).saturating_mul(criteria.per_page) as usize;
        let items: Vec<Inquiry> =
            matched.into_iter().skip(offset).take(criteria.per_page as usize).collect();

        Ok(Page { items, info })
    }

    async fn fetch_stats(&self) -> Result<InquiryStats, StorageError> {
        let records = self.records.read().await;
        let mut stats = InquiryStats { total: records.len() as u64, ..InquiryStats::default() };
        for inquiry in records.iter() {
            match inquiry.status {
                InquiryStatus::Pending => stats.pending += 1,
                InquiryStatus::InProgress => stats.in_progress += 1,
                InquiryStatus::Resolved => stats.resolved += 1,
                InquiryStatus::Closed => stats.closed += 1,
            }
        }
        Ok(stats)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        let position = records.iter().position(|inquiry| inquiry.id == id);
        match position {
            Some(index) => {
                records.remove(index);
                tracing::debug!(id, "deleted inquiry");
                Ok(())
            },
            None => Err(StorageError::NotFound { entity: "inquiry", id: id.to_owned() }),
        }
    }
}
