use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::server::ConfigServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub server_name: String,
    pub read_only: bool,
}

/// Health check handler
pub async fn health_check(State(server): State<ConfigServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        server_name: server.config.name.clone(),
        read_only: server.config.read_only,
    })
}
