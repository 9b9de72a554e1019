//! Filter criteria: the normalized shape of "what the admin wants to see".
//!
//! Criteria are plain serializable values. Setters return a new value; any
//! change other than the page number resets the page to 1, because the
//! result set shape has changed. Invalid numeric values are corrected to
//! the nearest valid value by [`FilterCriteria::normalized`] rather than
//! rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::CoreError;
use crate::inquiry::{InquiryPriority, InquiryStatus, InquiryType};

/// Field the result set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Chronological by creation timestamp.
    CreatedAt,
    /// By priority rank (urgent > high > medium > low), not alphabetical.
    Priority,
    /// Lexicographic by status wire string.
    Status,
}

impl SortField {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::CreatedAt => "createdAt",
            Self::Priority => "priority",
            Self::Status => "status",
        }
    }
}

impl Default for SortField {
    fn default() -> Self {
        Self::CreatedAt
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            other => Err(CoreError::InvalidSortField(other.to_owned())),
        }
    }
}

/// Sort direction. Flips the comparison, never the priority rank table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Desc
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::InvalidSortOrder(other.to_owned())),
        }
    }
}

/// The query the admin is currently expressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<InquiryPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<InquiryType>,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
    pub page: u64,
    pub per_page: u64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            priority: None,
            inquiry_type: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    /// Set or clear the free-text search. Blank strings clear the filter
    /// rather than sending an empty-string match. Resets the page.
    #[must_use]
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty());
        self.page = 1;
        self
    }

    /// Set or clear the status filter. Resets the page.
    #[must_use]
    pub fn with_status(mut self, status: Option<InquiryStatus>) -> Self {
        self.status = status;
        self.page = 1;
        self
    }

    /// Set or clear the priority filter. Resets the page.
    #[must_use]
    pub fn with_priority(mut self, priority: Option<InquiryPriority>) -> Self {
        self.priority = priority;
        self.page = 1;
        self
    }

    /// Set or clear the inquiry-type filter. Resets the page.
    #[must_use]
    pub fn with_inquiry_type(mut self, inquiry_type: Option<InquiryType>) -> Self {
        self.inquiry_type = inquiry_type;
        self.page = 1;
        self
    }

    /// Change the sort. Resets the page.
    #[must_use]
    pub fn with_sort(mut self, sort_by: SortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self.page = 1;
        self
    }

    /// Change the page size. Resets the page.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page;
        self.page = 1;
        self
    }

    /// Move to another page. The only setter that keeps the rest intact.
    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Apply a partial update through the setters, so the page-reset rule
    /// holds for every touched field.
    #[must_use]
    pub fn apply(self, patch: FilterPatch) -> Self {
        let mut next = self;
        if let Some(search) = patch.search {
            next = next.with_search(search);
        }
        if let Some(status) = patch.status {
            next = next.with_status(status);
        }
        if let Some(priority) = patch.priority {
            next = next.with_priority(priority);
        }
        if let Some(inquiry_type) = patch.inquiry_type {
            next = next.with_inquiry_type(inquiry_type);
        }
        if let Some(sort_by) = patch.sort_by {
            let sort_order = next.sort_order;
            next = next.with_sort(sort_by, sort_order);
        }
        if let Some(sort_order) = patch.sort_order {
            let sort_by = next.sort_by;
            next = next.with_sort(sort_by, sort_order);
        }
        if let Some(per_page) = patch.per_page {
            next = next.with_per_page(per_page);
        }
        next
    }

    /// Correct out-of-range numeric fields to the nearest valid value:
    /// page and page size floor at 1, page size caps at [`MAX_PAGE_SIZE`].
    /// Never drops a field and never errors.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.per_page = self.per_page.clamp(1, MAX_PAGE_SIZE);
        self.search = self.search.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty());
        self
    }
}

/// Partial update to [`FilterCriteria`].
///
/// The outer `Option` means "leave untouched"; the inner `Option` on the
/// filter fields means "set" vs "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Option<Option<String>>,
    pub status: Option<Option<InquiryStatus>>,
    pub priority: Option<Option<InquiryPriority>>,
    pub inquiry_type: Option<Option<InquiryType>>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
    pub per_page: Option<u64>,
}
