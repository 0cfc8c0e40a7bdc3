use crate::{AppState, error::AppError};
use axum::{Json, extract::State, http::StatusCode};
use core_types::{HealthStatus, NewRecord, Record};
use std::sync::Arc;

/// # GET /api/health
/// Always succeeds with a static payload; no side effects.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        message: "Backend is healthy!".to_string(),
    })
}

/// # GET /api/records
/// Fetches all records, most recent first.
pub async fn list_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Record>>, AppError> {
    let records = state
        .repo
        .list_records()
        .await
        .map_err(AppError::ListRecords)?;
    Ok(Json(records))
}

/// # POST /api/records
/// Creates a record from the request body. A missing or blank `content`
/// field is rejected before any storage access; otherwise the content is
/// stored verbatim and the full record echoed back with 201.
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewRecord>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let content = match body.content {
        Some(ref content) if !content.trim().is_empty() => content,
        _ => return Err(AppError::MissingContent),
    };

    let record = state
        .repo
        .create_record(content)
        .await
        .map_err(AppError::CreateRecord)?;
    Ok((StatusCode::CREATED, Json(record)))
}
