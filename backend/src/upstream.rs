//! Shared HTTP client used by the proxy routes to reach the remote bakery API.
//!
//! The main components are:
//! - `UpstreamState`: a clonable holder of the `reqwest::Client` and the API base
//!   URL. It is created in `main.rs` from the `Config` and injected into the Actix
//!   application as `web::Data`.
//! - `forward`: sends one request upstream, copying the caller's `Authorization`
//!   header and body, and returns the upstream status, content type and body
//!   untouched so handlers can pass them through.
//!
//! There is no retry and no timeout: a request is forwarded exactly once and the
//! outcome is reported to the browser as received.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::{error, info};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use uuid::Uuid;

#[derive(Clone)]
pub struct UpstreamState {
    pub client: Client,
    /// Base URL without trailing slash, e.g. `http://localhost:5000`.
    pub base_url: String,
}

impl UpstreamState {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// What came back from the remote API, kept as raw bytes.
#[derive(Debug)]
pub struct ForwardedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ForwardedResponse {
    /// Rebuilds the upstream answer as an Actix response with the same status,
    /// content type and body.
    pub fn into_http_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        let mut builder = HttpResponse::build(status);
        if let Some(content_type) = self.content_type {
            builder.content_type(content_type);
        }
        builder.body(self.body)
    }
}

/// Forwards one request to `{base_url}/{path}`.
///
/// # Returns
/// - `Ok(ForwardedResponse)` whatever the upstream status code is.
/// - `Err(String)` when the remote API could not be reached or its body could
///   not be read.
pub async fn forward(
    state: &UpstreamState,
    method: Method,
    path: &str,
    authorization: Option<&str>,
    body: Vec<u8>,
) -> Result<ForwardedResponse, String> {
    let url = state.url(path);
    let request_id = Uuid::new_v4().to_string();
    info!("[{}] {} {}", request_id, method, url);

    let mut request = state
        .client
        .request(method.clone(), &url)
        .header("X-Request-Id", &request_id)
        .header(CONTENT_TYPE, "application/json")
        .body(body);
    if let Some(value) = authorization {
        request = request.header(AUTHORIZATION, value);
    }

    let response = request.send().await.map_err(|e| {
        error!("[{}] {} {} failed: {}", request_id, method, url, e);
        format!("Remote API unreachable: {}", e)
    })?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .bytes()
        .await
        .map_err(|e| format!("Error reading remote API response: {}", e))?
        .to_vec();

    info!("[{}] {} {} -> {}", request_id, method, url, status);
    Ok(ForwardedResponse {
        status,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let state = UpstreamState::new("http://localhost:5000/");
        assert_eq!(state.url("/orders/42/claim"), "http://localhost:5000/orders/42/claim");
        assert_eq!(state.url("orders"), "http://localhost:5000/orders");
    }

    #[test]
    fn forwarded_status_and_body_are_kept() {
        let response = ForwardedResponse {
            status: 409,
            content_type: Some("application/json".to_string()),
            body: br#"{"message":"conflict"}"#.to_vec(),
        }
        .into_http_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
