//! ConfigService Server - pricing-engine config document API
//!
//! This library provides the HTTP surface of the ConfigService development
//! server: a single JSON document exposed at a fixed route for reading and
//! (unless running read-only) writing.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use error::*;
pub use server::{ConfigServer, ServerConfig};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: ConfigServer) -> Router {
    routes::create_routes(server.is_read_only())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer()),
        )
        .with_state(server)
}
