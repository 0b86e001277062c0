//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::to_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically increment the record's visit counter
/// 2. Return 302 Found pointing at the original URL
///
/// # Errors
///
/// Returns 404 `URL not found` if the code was never issued.
/// Returns 500 `Server error` on storage failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.redirect_service.resolve(&code).await?;

    let location = HeaderValue::try_from(to_location(&original_url))
        .map_err(|e| AppError::internal(format!("Stored URL is not a valid header: {e}")))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
