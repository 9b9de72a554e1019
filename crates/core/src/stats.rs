//! Collection-wide counts by status, independent of the current filters.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::inquiry::InquiryStatus;

/// Aggregate counts over the whole inquiry collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryStats {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
}

impl InquiryStats {
    /// Count for a single status.
    #[must_use]
    pub const fn count_for(&self, status: InquiryStatus) -> u64 {
        match status {
            InquiryStatus::Pending => self.pending,
            InquiryStatus::InProgress => self.in_progress,
            InquiryStatus::Resolved => self.resolved,
            InquiryStatus::Closed => self.closed,
        }
    }

    /// Sum of the per-status counts.
    #[must_use]
    pub const fn status_sum(&self) -> u64 {
        self.pending + self.in_progress + self.resolved + self.closed
    }

    /// The status enum is exhaustive and every record has exactly one
    /// status, so the per-status counts must sum to the total. A mismatch
    /// indicates a boundary-layer inconsistency and is surfaced as a
    /// warning, never silently ignored.
    #[must_use]
    pub fn integrity_error(&self) -> Option<CoreError> {
        let sum = self.status_sum();
        (sum != self.total).then_some(CoreError::InconsistentStats { total: self.total, sum })
    }
}
