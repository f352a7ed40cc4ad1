use std::sync::OnceLock;

use async_trait::async_trait;
use chat_core::{GatewayError, InferenceGateway};
use gloo_net::http::Request;
use shared_types::{InferRequest, InferResponse, INFER_PATH};

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (API sits behind the same host)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    api_base_for_host(&hostname)
}

fn api_base_for_host(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        String::new()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// `POST /api/infer` over the browser's fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGateway {
    url: String,
}

impl HttpGateway {
    pub fn new(base: &str) -> Self {
        Self {
            url: format!("{}{}", base.trim_end_matches('/'), INFER_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(api_base())
    }
}

#[async_trait(?Send)]
impl InferenceGateway for HttpGateway {
    async fn infer(&self, text: &str) -> Result<String, GatewayError> {
        let request = InferRequest {
            text: text.to_string(),
        };

        let response = Request::post(&self.url)
            .json(&request)
            .map_err(|e| GatewayError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(GatewayError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read body: {e}")))?;

        parse_infer_body(&body)
    }
}

fn parse_infer_body(body: &str) -> Result<String, GatewayError> {
    serde_json::from_str::<InferResponse>(body)
        .map(|data| data.result)
        .map_err(|e| GatewayError::Malformed(e.to_string()))
}
