//! Pagination metadata and the pure range calculator.

use serde::{Deserialize, Serialize};

/// One page of records plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Pagination metadata for a result page.
///
/// Invariants: `total_pages = ceil(total_items / per_page)` clamped to at
/// least 1, `has_next_page = current_page < total_pages`,
/// `has_prev_page = current_page > 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageInfo {
    /// Derive the metadata from counts. Zero inputs are corrected to the
    /// floor of 1 so the invariants hold for any caller.
    #[must_use]
    pub fn from_counts(current_page: u64, per_page: u64, total_items: u64) -> Self {
        let current_page = current_page.max(1);
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page).max(1);
        Self {
            current_page,
            per_page,
            total_items,
            total_pages,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

/// Human-readable "showing X–Y of Z" boundaries for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Pure pagination calculator.
///
/// `start = (page-1)*per_page + 1`, `end = min(page*per_page, total_items)`.
/// Returns the degenerate-but-valid range `start = 0, end = 0` when the
/// collection is empty or the page lies past the last record. All math is
/// saturating, so no input can underflow.
#[must_use]
pub fn page_range(current_page: u64, per_page: u64, total_items: u64) -> PageRange {
    let page = current_page.max(1);
    let per_page = per_page.max(1);
    let total_pages = total_items.div_ceil(per_page).max(1);
    let has_next = page < total_pages;
    let has_prev = page > 1;

    let start = (page - 1).saturating_mul(per_page).saturating_add(1);
    if total_items == 0 || start > total_items {
        return PageRange { start: 0, end: 0, has_next, has_prev };
    }
    let end = page.saturating_mul(per_page).min(total_items);
    PageRange { start, end, has_next, has_prev }
}
