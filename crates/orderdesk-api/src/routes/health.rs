//! Health check endpoint.

use axum::{Router, routing::get};

use crate::state::AppState;

/// Fixed liveness body reported by the health probe.
const LIVENESS_BODY: &str = "Order Service Running";

/// GET /health
async fn health_check() -> &'static str {
    LIVENESS_BODY
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
