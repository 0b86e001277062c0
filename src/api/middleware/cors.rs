//! Cross-origin resource sharing.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method and header, so the client bundle can be hosted
/// on a different origin than the API.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
