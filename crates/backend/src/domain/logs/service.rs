use anyhow::Result;
use contracts::logs::LogsSummaryResponse;

use super::repository;
use crate::domain::admins;

/// Admin-scoped log summary: the full row set plus the precomputed
/// suspicious-IP projection. `None` means the admin is unknown.
pub async fn logs_summary(
    admin_id: &str,
    device_id: Option<&str>,
) -> Result<Option<LogsSummaryResponse>> {
    if !admins::service::exists(admin_id).await? {
        return Ok(None);
    }

    let logs = repository::list_logs(device_id).await?;
    let suspicious_ip = repository::suspicious_ips(device_id).await?;

    Ok(Some(LogsSummaryResponse {
        logs,
        suspicious_ip,
    }))
}
