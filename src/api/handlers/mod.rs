// HTTP handlers (controller adapters)

pub mod layout;
pub mod people;
pub mod teams;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
