//! Inference API Integration Tests
//!
//! Tests full HTTP request/response cycles against the router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use inference_api::api;
use shared_types::{InferRequest, InferResponse};

async fn json_response(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&body).expect("Invalid JSON response");
    (status, value)
}

fn infer_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/infer")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_infer_returns_result() {
    let app = api::router();
    let body = serde_json::to_string(&InferRequest {
        text: "hello".to_string(),
    })
    .unwrap();

    let (status, value) = json_response(&app, infer_request(body)).await;
    assert_eq!(status, StatusCode::OK);

    let parsed: InferResponse = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.result, "AI result: 'hello' summarized!");
}

#[tokio::test]
async fn test_infer_keeps_multiline_text() {
    let app = api::router();
    let (status, value) =
        json_response(&app, infer_request(json!({"text": "a\nb"}).to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["result"], "AI result: 'a\nb' summarized!");
}

#[tokio::test]
async fn test_infer_rejects_missing_text() {
    let app = api::router();
    let (status, value) =
        json_response(&app, infer_request(json!({"message": "hi"}).to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["success"], false);
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn test_infer_rejects_broken_json() {
    let app = api::router();
    let (status, value) = json_response(&app, infer_request("{\"text\":".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], false);
}

#[tokio::test]
async fn test_infer_rejects_wrong_content_type() {
    let app = api::router();
    let req = Request::builder()
        .method("POST")
        .uri("/api/infer")
        .header("content-type", "text/plain")
        .body(Body::from("hello"))
        .unwrap();

    let (status, value) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(value["success"], false);
}

#[tokio::test]
async fn test_health_check() {
    let app = api::router();
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, value) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["service"], "inference-api");
}
