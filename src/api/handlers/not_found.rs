//! Fallback for unknown API paths.

use crate::error::AppError;

/// Answers any unmatched `/api/*` request with a JSON 404.
pub async fn api_not_found_handler() -> AppError {
    AppError::not_found("API endpoint not found")
}
