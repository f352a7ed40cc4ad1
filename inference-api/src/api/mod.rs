//! HTTP API routes for the inference backend

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

pub mod infer;

/// Errors returned to HTTP clients as `{"success": false, "error": ...}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The JSON extractor refused the body. Keeps axum's status
    /// (400 syntax, 413 too large, 415 content type, 422 shape).
    #[error("invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({
                "success": false,
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

/// Configure all API routes
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(shared_types::INFER_PATH, post(infer::infer))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "inference-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
