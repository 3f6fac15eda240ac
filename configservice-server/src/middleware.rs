use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS layer for the development endpoint.
///
/// The document is edited from browser-based dev tooling served on
/// arbitrary local ports, so the policy is deliberately open.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
}
