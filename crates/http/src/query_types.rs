//! Request/query types (Deserialize)

use inquiry_desk_core::{CoreError, DEFAULT_PAGE_SIZE, FilterCriteria};
use serde::Deserialize;

const fn default_page() -> u64 {
    1
}

const fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Query parameters of `GET /api/admin/inquiries`.
///
/// Enum fields arrive as strings and are parsed strictly: an unknown
/// status/priority/type/sort value is a 400, never a silent default.
/// Numeric fields are corrected by [`FilterCriteria::normalized`].
#[derive(Debug, Deserialize)]
pub struct InquiryListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, rename = "type")]
    pub inquiry_type: Option<String>,
    #[serde(default, rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(default, rename = "sortOrder")]
    pub sort_order: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

impl InquiryListQuery {
    /// Build normalized filter criteria, rejecting malformed enum strings.
    pub fn into_criteria(self) -> Result<FilterCriteria, CoreError> {
        let mut criteria = FilterCriteria {
            search: present(self.search),
            page: self.page,
            per_page: self.limit,
            ..FilterCriteria::default()
        };
        if let Some(status) = present(self.status) {
            criteria.status = Some(status.parse()?);
        }
        if let Some(priority) = present(self.priority) {
            criteria.priority = Some(priority.parse()?);
        }
        if let Some(inquiry_type) = present(self.inquiry_type) {
            criteria.inquiry_type = Some(inquiry_type.parse()?);
        }
        if let Some(sort_by) = present(self.sort_by) {
            criteria.sort_by = sort_by.parse()?;
        }
        if let Some(sort_order) = present(self.sort_order) {
            criteria.sort_order = sort_order.parse()?;
        }
        Ok(criteria.normalized())
    }
}
