//! HTTP route handlers.
//!
//! The service exposes exactly one behavior over HTTP: the liveness check.
//! Every method on every path resolves to it, so the handler is mounted at
//! the root and again as the router fallback.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;

use axum::{middleware, routing::any, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router: liveness everywhere, request ID span outermost.
pub fn create_router() -> Router {
    Router::new()
        .route("/", any(health::health))
        .fallback(health::health)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
