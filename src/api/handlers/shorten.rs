//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::ShortenService;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;

/// Creates (or reuses) the short code for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://sho.rt/aB3_x9", "shortCode": "aB3_x9" }
/// ```
///
/// The short URL uses the scheme and host the client used for this request.
///
/// # Errors
///
/// - 400 `URL is required` - field missing, empty, or body not JSON
/// - 400 `Invalid URL format` - value is not an absolute URL
/// - 500 `Server error` - storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unreadable shorten request body");
            ShortenRequest::default()
        }
    };

    let origin = request_origin(&headers, &uri, state.behind_proxy)?;

    let record = state
        .shorten_service
        .shorten(request.original_url.as_deref())
        .await?;

    Ok(Json(ShortenResponse {
        short_url: ShortenService::short_url(&origin, &record.short_code),
        short_code: record.short_code,
    }))
}
