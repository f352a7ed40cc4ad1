//! `POST /api/infer`
//!
//! Stand-in inference: the reply acknowledges the submitted text.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use shared_types::{InferRequest, InferResponse};

use crate::api::ApiError;

pub async fn infer(
    payload: Result<Json<InferRequest>, JsonRejection>,
) -> Result<Json<InferResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Rejected inference request"
        );
        ApiError::from(rejection)
    })?;

    tracing::info!(chars = req.text.chars().count(), "Inference request");

    Ok(Json(InferResponse {
        result: summarize(&req.text),
    }))
}

pub fn summarize(text: &str) -> String {
    format!("AI result: '{text}' summarized!")
}
