//! HTTP admin API for inquiry-desk.
//!
//! Thin presentation layer over [`InquiryListService`]: query parameters
//! deserialize into filter criteria and each request runs a one-shot read
//! for its own criteria, so concurrent requests never see each other's
//! results. Deletes go through the stateful delete coordination.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use inquiry_desk_service::InquiryListService;

pub use query_types::InquiryListQuery;
pub use response_types::{
    DeleteResponse, HealthResponse, InquiryListResponse, StatsResponse,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Orchestrates the query, stats, and delete operations.
    pub list_service: Arc<InquiryListService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/admin/inquiries", get(handlers::inquiries::list_inquiries))
        .route("/api/admin/inquiries/stats", get(handlers::inquiries::get_stats))
        .route("/api/admin/inquiries/{id}", delete(handlers::inquiries::delete_inquiry))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
