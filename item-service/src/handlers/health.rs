use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::observability::render_metrics;

use crate::dtos::HealthResponse;
use crate::startup::AppState;

/// Liveness plus database reachability. A failed probe is reported as 503 with
/// `unhealthy`, never raised as an error.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let hostname = state.identity.hostname().to_string();

    match state.store.health_check().await {
        Ok(()) => {
            tracing::debug!("Health check passed");
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                    database: "connected".to_string(),
                    hostname,
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed - database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    database: "disconnected".to_string(),
                    hostname,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Readiness check endpoint for K8s readiness probes.
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    match state.store.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Prometheus metrics endpoint.
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        render_metrics(),
    )
}
