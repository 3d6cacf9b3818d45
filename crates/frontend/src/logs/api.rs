//! Backend calls for log data and warning emails.

use contracts::auth::WarningResponse;
use contracts::logs::LogsSummaryResponse;
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Why a summary fetch failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// No admin identity is available; the request is never attempted.
    #[error("Not signed in")]
    Unauthorized,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    BadResponse(String),
}

/// Why a warning email request failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmailError {
    /// The source has no device attached, so there is nobody to warn.
    #[error("No device is linked to this source")]
    MissingDevice,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    BadResponse(String),
}

/// Fetches the admin-scoped log summary, optionally narrowed to one
/// device.
pub async fn fetch_logs_summary(
    admin_id: &str,
    device_id: Option<&str>,
) -> Result<LogsSummaryResponse, FetchError> {
    if admin_id.is_empty() {
        return Err(FetchError::Unauthorized);
    }

    let mut url = format!(
        "{}?admin_id={}",
        api_url("/admin/logs_summary"),
        urlencoding::encode(admin_id)
    );
    if let Some(device) = device_id {
        url.push_str(&format!("&device_id={}", urlencoding::encode(device)));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::BadResponse(format!(
            "status {}",
            response.status()
        )));
    }

    response
        .json::<LogsSummaryResponse>()
        .await
        .map_err(|e| FetchError::BadResponse(format!("invalid payload: {}", e)))
}

/// Asks the backend to mail a warning to the owner of `device_id`,
/// quoting `log_line`. An empty device id is refused locally, before
/// any request goes out.
pub async fn send_warning(device_id: &str, log_line: &str) -> Result<String, EmailError> {
    if device_id.trim().is_empty() {
        return Err(EmailError::MissingDevice);
    }

    let url = format!(
        "{}?device_id={}&log_line={}",
        api_url("/send_warning"),
        urlencoding::encode(device_id),
        urlencoding::encode(log_line)
    );

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| EmailError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(EmailError::BadResponse(format!(
            "status {}",
            response.status()
        )));
    }

    response
        .json::<WarningResponse>()
        .await
        .map(|r| r.message)
        .map_err(|e| EmailError::BadResponse(format!("invalid payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    #[test]
    fn test_send_warning_refuses_empty_device_before_any_request() {
        // The future must resolve on the first poll: hitting the network
        // would suspend it.
        let mut fut = std::pin::pin!(send_warning("", "Jun 14 15:16:01 combo sshd: failure"));
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(Err(EmailError::MissingDevice)) => {}
            other => panic!("expected immediate MissingDevice, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_refuses_blank_admin_before_any_request() {
        let mut fut = std::pin::pin!(fetch_logs_summary("", None));
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(Err(FetchError::Unauthorized)) => {}
            other => panic!("expected immediate Unauthorized, got {:?}", other),
        }
    }
}
