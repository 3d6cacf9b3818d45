use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

/// HTTP request logging middleware.
///
/// One line per request: timestamp, duration, response size, status,
/// method and path. The response body is buffered to learn its real
/// size, then handed back unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(_) => {
            tracing::warn!(
                "{} | {:>5}ms | {:>9} | {} {:>6} {}",
                Utc::now().format("%H:%M:%S"),
                start.elapsed().as_millis(),
                "unknown",
                parts.status.as_u16(),
                method,
                uri.path()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format!(
        "{} | {:>5}ms | {:>9} | {} {:>6} {}",
        Utc::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size_display(bytes.len()),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    if parts.status.is_success() {
        tracing::info!("{line}");
    } else {
        tracing::warn!("{line}");
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Human-readable response size.
fn size_display(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_display() {
        assert_eq!(size_display(0), "0 B");
        assert_eq!(size_display(512), "512 B");
        assert_eq!(size_display(2048), "2.0 KB");
        assert_eq!(size_display(5 * 1024 * 1024), "5.0 MB");
    }
}
