use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to fetch records")]
    ListRecords(#[source] DbError),
    #[error("Failed to create record")]
    CreateRecord(#[source] DbError),
    #[error("Content is required")]
    MissingContent,
}

/// Converts our custom `AppError` into an HTTP response. Database failures
/// are logged with full detail server-side but surfaced to the caller only
/// as a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::ListRecords(ref db_err) => {
                tracing::error!(error = ?db_err, "Error fetching records.");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::CreateRecord(ref db_err) => {
                tracing::error!(error = ?db_err, "Error creating record.");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MissingContent => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
