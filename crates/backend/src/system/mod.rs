pub mod auth;
pub mod initialization;
pub mod mailer;
pub mod middleware;
pub mod tracing;
