use axum::extract::Query;
use axum::{http::StatusCode, Json};
use contracts::auth::WarningResponse;
use serde::Deserialize;

use crate::domain::notifications::{self, WarningDispatch};
use crate::system::mailer::LogMailer;

#[derive(Debug, Deserialize)]
pub struct WarningQuery {
    pub device_id: String,
    pub log_line: String,
}

/// POST /send_warning?device_id=..&log_line=..
pub async fn send_warning(
    Query(params): Query<WarningQuery>,
) -> Result<Json<WarningResponse>, StatusCode> {
    if params.device_id.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    match notifications::dispatch_warning(&params.device_id, &params.log_line, &LogMailer).await {
        Ok(WarningDispatch::Sent { recipient }) => Ok(Json(WarningResponse {
            message: format!("Warning email sent to {recipient}"),
        })),
        Ok(WarningDispatch::UnknownDevice) => Err(StatusCode::NOT_FOUND),
        Ok(WarningDispatch::NoRecipient) => {
            tracing::warn!("Device {} has no notifiable user", params.device_id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("send_warning failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
