//! Login call against the backend admin endpoint.

use contracts::auth::{AdminUser, LoginRequest};
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Why a sign-in attempt failed. The first two arms mirror the backend
/// status codes for an unknown email (404) and a wrong password (401);
/// everything else is a transport problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("No account exists for this email")]
    NotFound,
    #[error("Incorrect password")]
    InvalidCredential,
    #[error("Sign-in failed: {0}")]
    Transport(String),
}

/// Verifies credentials and returns the admin profile on success.
pub async fn login(email: String, password: String) -> Result<AdminUser, AuthError> {
    let body = LoginRequest { email, password };

    let response = Request::post(&api_url("/admin/login"))
        .json(&body)
        .map_err(|e| AuthError::Transport(format!("Failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(|e| AuthError::Transport(format!("Failed to reach server: {}", e)))?;

    match response.status() {
        200 => response
            .json::<AdminUser>()
            .await
            .map_err(|e| AuthError::Transport(format!("Failed to parse response: {}", e))),
        404 => Err(AuthError::NotFound),
        401 => Err(AuthError::InvalidCredential),
        status => Err(AuthError::Transport(format!("Unexpected status {}", status))),
    }
}
