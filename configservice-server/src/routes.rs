use axum::{routing::get, Router};

use crate::{
    handlers::{config, health},
    server::ConfigServer,
};

/// Create health check routes
pub fn health_routes() -> Router<ConfigServer> {
    Router::new().route("/health", get(health::health_check))
}

/// Create the read-write config document routes
///
/// GET reads, POST/PUT write, anything else gets 405 with the full
/// `Allow` list.
pub fn config_routes() -> Router<ConfigServer> {
    Router::new().route(
        config::CONFIG_DOCUMENT_ROUTE,
        get(config::get_config)
            .post(config::put_config)
            .put(config::put_config)
            .fallback(config::method_not_allowed),
    )
}

/// Create the read-only config document routes
///
/// Mirrors the preview-server variant: GET only, every other method gets
/// 405 with `Allow: GET`.
pub fn read_only_config_routes() -> Router<ConfigServer> {
    Router::new().route(
        config::CONFIG_DOCUMENT_ROUTE,
        get(config::get_config).fallback(config::method_not_allowed_read_only),
    )
}

/// Create all application routes
pub fn create_routes(read_only: bool) -> Router<ConfigServer> {
    let document_routes = if read_only {
        read_only_config_routes()
    } else {
        config_routes()
    };

    Router::new().merge(health_routes()).merge(document_routes)
}
