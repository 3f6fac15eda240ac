use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    server::ConfigServer,
};

/// Fixed route the pricing-engine document is served under (case-sensitive).
pub const CONFIG_DOCUMENT_ROUTE: &str = "/api/config/pricing-engine";

/// `Allow` header value for the read-write variant of the endpoint.
pub const ALLOW_READ_WRITE: &str = "GET, POST, PUT";

/// `Allow` header value for the read-only variant of the endpoint.
pub const ALLOW_READ_ONLY: &str = "GET";

/// Read the stored pricing-engine document.
///
/// The stored bytes are returned verbatim with a JSON content type; a file
/// that no longer parses is still served as-is.
pub async fn get_config(State(server): State<ConfigServer>) -> ApiResult<Response> {
    let bytes = server.store.read_document().await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        bytes,
    )
        .into_response())
}

/// Validate, pretty-print, and persist a new pricing-engine document.
///
/// The full request body is read before processing. Malformed JSON is
/// rejected with 400 before anything touches the filesystem.
pub async fn put_config(
    State(server): State<ConfigServer>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let value: Value = serde_json::from_slice(&body).map_err(|e| ApiError::InvalidJson {
        message: e.to_string(),
    })?;

    server.store.write_document(&value).await?;

    info!(
        path = %server.store.path().display(),
        bytes = body.len(),
        "pricing-engine document updated"
    );
    Ok(Json(json!({ "ok": true })))
}

/// 405 fallback for the read-write variant.
pub async fn method_not_allowed() -> Response {
    method_not_allowed_response(ALLOW_READ_WRITE)
}

/// 405 fallback for the read-only variant.
pub async fn method_not_allowed_read_only() -> Response {
    method_not_allowed_response(ALLOW_READ_ONLY)
}

fn method_not_allowed_response(allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        "Method Not Allowed",
    )
        .into_response()
}
