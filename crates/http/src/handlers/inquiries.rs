use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use inquiry_desk_service::DeleteOutcome;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::InquiryListQuery;
use crate::response_types::{DeleteResponse, InquiryListResponse, StatsResponse};

pub async fn list_inquiries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InquiryListQuery>,
) -> Result<Json<InquiryListResponse>, ApiError> {
    let criteria = query.into_criteria().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    // One-shot read: each request gets its own criteria's results, even
    // when requests with different criteria are in flight at once.
    let result = state.list_service.query(&criteria).await?;

    Ok(Json(InquiryListResponse {
        inquiries: result.page.items,
        pagination: result.page.info,
        stats: result.stats,
        warning: result.integrity_warning,
    }))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let snapshot = state.list_service.stats().await?;
    Ok(Json(StatsResponse { stats: snapshot.stats, warning: snapshot.integrity_warning }))
}

pub async fn delete_inquiry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    match state.list_service.request_delete(&id).await {
        DeleteOutcome::Deleted => Ok(Json(DeleteResponse { deleted: true, id })),
        DeleteOutcome::AlreadyInFlight => {
            Err(ApiError::Conflict(format!("delete already in flight for inquiry '{id}'")))
        },
        DeleteOutcome::Failed(err) => Err(err.into()),
    }
}
