use super::{remote_url, ApiError};
use common::requests::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

/// `POST /api/users/login`. The only call made without a token.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let response = Request::post(&remote_url("api/users/login"))
        .json(&body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match response.status() {
        200..=299 => response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(
            status,
            response.text().await.unwrap_or_default(),
        )),
    }
}
