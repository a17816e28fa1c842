//! Health check endpoint for external monitors.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! The handler reads nothing from the request and touches nothing but the
//! process itself, so it succeeds for every method and path it is mounted on,
//! whether or not the database or the weekly job is healthy.

/// Health check handler.
///
/// Returns a fixed plain-text response to indicate the service is running.
/// This is a liveness probe - it only checks that the process can respond
/// to HTTP.
pub async fn health() -> &'static str {
    "Health check passed!"
}
