use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body served at `/`.
pub const WELCOME: &str = "welcome";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the category store is reachable.
    pub db_healthy: bool,
}

/// GET / -- static liveness body.
pub async fn welcome() -> &'static str {
    WELCOME
}

/// GET /health -- returns service and storage health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.listing.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Category store health check failed");
            false
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
