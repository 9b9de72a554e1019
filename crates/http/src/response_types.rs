//! Response types (Serialize)

use serde::Serialize;

use inquiry_desk_core::{Inquiry, InquiryStats, PageInfo};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryListResponse {
    pub inquiries: Vec<Inquiry>,
    pub pagination: PageInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<InquiryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: InquiryStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
