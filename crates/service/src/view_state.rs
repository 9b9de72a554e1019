//! The single mutable resource behind the admin list view.

use std::collections::HashSet;

use inquiry_desk_core::{FilterCriteria, Inquiry, InquiryStats, Page};

/// Last-known-good view of the inquiry list.
///
/// Owned exclusively by [`InquiryListService`](crate::InquiryListService);
/// observers only ever receive clones. `page` and `stats` hold the last
/// successful results and survive transient read failures, so the view
/// never flashes to an empty state.
#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    /// The criteria the current contents correspond to.
    pub criteria: FilterCriteria,
    /// Last successfully fetched page, if any cycle has succeeded.
    pub page: Option<Page<Inquiry>>,
    /// Last successfully fetched stats snapshot.
    pub stats: Option<InquiryStats>,
    /// True while a fetch cycle is in flight.
    pub loading: bool,
    /// Ids with a delete request currently in flight.
    pub deleting: HashSet<String>,
    /// Message from the most recent failed read leg, if the latest cycle
    /// did not fully succeed.
    pub last_error: Option<String>,
    /// Non-blocking warning raised when the stats counts are inconsistent
    /// with the status enum (a boundary bug, not a user error).
    pub integrity_warning: Option<String>,
}

impl ListViewState {
    /// Whether a delete for the given id is in flight.
    #[must_use]
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }
}
