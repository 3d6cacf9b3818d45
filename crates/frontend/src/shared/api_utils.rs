//! Backend endpoint URL construction.

/// API base derived from the page's own location. The backend listens
/// on port 8000 whatever host serves the bundle.
///
/// Returns an empty string outside a browser context.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Full URL for an API path, e.g. `api_url("/admin/logs_summary")`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
