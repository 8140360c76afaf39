//! Liveness endpoint.

use axum::{routing::get, Router};

async fn health() -> &'static str {
    "ok"
}

/// `GET /health` - unauthenticated liveness probe.
pub fn health_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
