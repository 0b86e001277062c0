//! Handler for the admin listing.

use axum::{Json, extract::State};

use crate::api::dto::url_record::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored record, newest first.
///
/// # Endpoint
///
/// `GET /api/admin/urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "_id": 2,
///     "originalUrl": "https://example.com/very/long/path",
///     "shortCode": "aB3_x9",
///     "visits": 1,
///     "createdAt": "2024-01-15T12:30:00Z"
///   }
/// ]
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlRecordResponse>>, AppError> {
    let records = state.admin_service.list_all().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}
