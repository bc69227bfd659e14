//! # Remote API client
//!
//! Thin typed wrappers over `gloo_net` requests to the bakery API. Every call
//! carries the session's bearer token, is sent once (no retry, no timeout) and
//! comes back as `Result<T, ApiError>`; the pages turn errors into toasts.
//!
//! ## Sub-modules
//! - `auth`: login.
//! - `orders`: order list/creation, status changes, reclamations and conflicts.
//! - `delivery`: the same-origin proxy routes served by the dashboard backend.
//! - `users`, `establishments`, `products`, `announcements`: CRUD endpoints.

pub mod announcements;
pub mod auth;
pub mod delivery;
pub mod establishments;
pub mod orders;
pub mod products;
pub mod users;

use common::session::UserInfo;
use gloo_console::error;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::config::API_BASE_URL;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// `401`: the token expired or was revoked.
    Unauthorized,
    /// Any other non-2xx answer, with the body text.
    Status(u16, String),
    /// The request never got an answer.
    Network(String),
    /// The answer could not be parsed, or the body could not be encoded.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Status(code, body) => write!(f, "HTTP {}: {}", code, body),
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Decode(e) => write!(f, "decode error: {}", e),
        }
    }
}

/// Where a request goes: the remote API or the dashboard's own proxy routes.
#[derive(Clone, Copy, PartialEq)]
enum Origin {
    Remote,
    SameOrigin,
}

/// Handle carrying the bearer token of the current session.
#[derive(Clone, PartialEq)]
pub struct Api {
    authorization: String,
}

impl Api {
    pub fn new(session: &UserInfo) -> Self {
        Self {
            authorization: session.bearer(),
        }
    }

    fn url(origin: Origin, path: &str) -> String {
        match origin {
            Origin::Remote => remote_url(path),
            Origin::SameOrigin => join_url("", path),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", &self.authorization)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.authorized(Request::get(&Self::url(Origin::Remote, path)));
        decode(execute(builder, None).await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.authorized(Request::post(&Self::url(Origin::Remote, path)));
        decode(execute(builder, Some(encode(body)?)).await?).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.authorized(Request::put(&Self::url(Origin::Remote, path)));
        decode(execute(builder, Some(encode(body)?)).await?).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.authorized(Request::patch(&Self::url(Origin::Remote, path)));
        decode(execute(builder, Some(encode(body)?)).await?).await
    }

    /// POST whose answer body is ignored.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = self.authorized(Request::post(&Self::url(Origin::Remote, path)));
        execute(builder, Some(encode(body)?)).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.authorized(Request::delete(&Self::url(Origin::Remote, path)));
        execute(builder, None).await.map(|_| ())
    }

    /// PUT to a same-origin proxy route of the dashboard backend.
    pub async fn put_local<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.authorized(Request::put(&Self::url(Origin::SameOrigin, path)));
        decode(execute(builder, Some(encode(body)?)).await?).await
    }
}

/// Absolute URL of `path` on the remote API.
pub(crate) fn remote_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn execute(builder: RequestBuilder, body: Option<String>) -> Result<Response, ApiError> {
    let request = match body {
        Some(json) => builder.header("Content-Type", "application/json").body(json),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        error!(format!("API request failed: {}", e));
        ApiError::Network(e.to_string())
    })?;

    match response.status() {
        401 => Err(ApiError::Unauthorized),
        status if !(200..300).contains(&status) => {
            let text = response.text().await.unwrap_or_default();
            error!(format!("API {} {} -> {}", response.url(), status, text));
            Err(ApiError::Status(status, text))
        }
        _ => Ok(response),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        error!(format!("Unexpected API payload from {}: {}", response.url(), e));
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_with_a_single_slash() {
        assert_eq!(
            join_url("https://api.boulangerie.fr/", "/api/users/login"),
            "https://api.boulangerie.fr/api/users/login"
        );
        assert_eq!(join_url("http://localhost:5000", "orders"), "http://localhost:5000/orders");
        assert_eq!(join_url("", "api/delivery/o1/claim"), "/api/delivery/o1/claim");
    }
}
