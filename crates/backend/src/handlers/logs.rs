use axum::extract::Query;
use axum::{http::StatusCode, Json};
use contracts::logs::LogsSummaryResponse;
use serde::Deserialize;

use crate::domain::logs::service;

#[derive(Debug, Deserialize)]
pub struct LogsSummaryQuery {
    pub admin_id: String,
    pub device_id: Option<String>,
}

/// GET /admin/logs_summary?admin_id=..&device_id=..
pub async fn logs_summary(
    Query(params): Query<LogsSummaryQuery>,
) -> Result<Json<LogsSummaryResponse>, StatusCode> {
    match service::logs_summary(&params.admin_id, params.device_id.as_deref()).await {
        Ok(Some(summary)) => Ok(Json(summary)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("logs_summary failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
