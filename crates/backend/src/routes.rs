use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes.
///
/// The dashboard is a static bundle served by the fallback, so the API
/// surface is just the three endpoints the client calls plus a liveness
/// probe.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/admin/login", post(handlers::auth::login))
        .route("/admin/logs_summary", get(handlers::logs::logs_summary))
        .route("/send_warning", post(handlers::warning::send_warning))
}
