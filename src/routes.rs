//! Top-level router configuration combining the API, redirects and the client bundle.
//!
//! # Route Structure
//!
//! - `/api/*`       - JSON API (unknown paths answer a JSON 404)
//! - `GET /{code}`  - Short link redirect
//! - `/index.html`  - Client entry document
//! - `/assets/*`    - Static client assets (missing files get the entry document)
//! - anything else  - Client entry document
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API

use std::path::Path;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding `index.html` and the `assets/` folder
pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    let index = ServeFile::new(static_dir.join("index.html"));
    let assets = ServeDir::new(static_dir.join("assets")).fallback(index.clone());

    Router::new()
        .nest("/api", api::routes::api_routes())
        .route_service("/index.html", index.clone())
        .route("/{code}", get(redirect_handler))
        .nest_service("/assets", assets)
        .fallback_service(index)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
