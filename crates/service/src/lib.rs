//! Service layer for inquiry-desk.
//!
//! Coordinates the query and stats reads behind the admin inquiry list:
//! one loading cycle covers both, results are applied independently, stale
//! cycles are discarded, and deletes refresh the whole view on success.

mod error;
mod list_service;
#[cfg(test)]
mod tests;
mod view_state;

pub use error::ServiceError;
pub use list_service::{DeleteOutcome, InquiryListService, QueryResult, StatsSnapshot};
pub use view_state::ListViewState;
