use axum::{extract::Json, http::StatusCode};
use contracts::auth::{AdminUser, LoginRequest};

use crate::domain::admins::service::{self, CredentialCheck};

/// POST /admin/login
///
/// 404 for an unknown email, 401 for a wrong password, so the client can
/// tell the two apart.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<AdminUser>, StatusCode> {
    match service::verify_credentials(&request.email, &request.password).await {
        Ok(CredentialCheck::Valid(profile)) => {
            tracing::info!("Admin {} signed in", profile.display_name());
            Ok(Json(profile))
        }
        Ok(CredentialCheck::UnknownEmail) => Err(StatusCode::NOT_FOUND),
        Ok(CredentialCheck::WrongPassword) => Err(StatusCode::UNAUTHORIZED),
        Err(e) => {
            tracing::error!("Credential check failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
