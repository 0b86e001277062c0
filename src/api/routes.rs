//! API route configuration.
//!
//! Every path under `/api` that is not listed here, or is listed but called
//! with another method, answers `404 { "error": "API endpoint not found" }`.

use crate::api::handlers::{
    api_not_found_handler, health_handler, list_urls_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shorten`     - Create or reuse a short code
/// - `GET  /admin/urls`  - List every record, newest first
/// - `GET  /health`      - Database connectivity check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/admin/urls", get(list_urls_handler))
        .route("/health", get(health_handler))
        .fallback(api_not_found_handler)
        .method_not_allowed_fallback(api_not_found_handler)
}
