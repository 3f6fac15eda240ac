use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use config_endpoint::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Main API error enum
///
/// The response bodies are an external contract shared with the dashboard
/// frontend: write validation failures produce
/// `{"error": "Invalid JSON", "message": ...}` and store failures produce
/// `{"error": ..., "code": ..., "path": ...}` with the POSIX-style code of
/// the underlying I/O error.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidJson { .. } => "invalid_json",
            ApiError::Store(StoreError::NotFound { .. }) => "not_found",
            ApiError::Store(_) => "io_failure",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        error!(
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "config endpoint request failed"
        );

        let payload = match &self {
            ApiError::InvalidJson { message } => json!({
                "error": "Invalid JSON",
                "message": message,
            }),
            ApiError::Store(store_err) => json!({
                "error": store_err.to_string(),
                "code": store_err.errno_code(),
                "path": store_err.path().map(|p| p.display().to_string()),
            }),
        };

        (status_code, Json(payload)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
