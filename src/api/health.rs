//! Liveness and readiness endpoints
//!
//! `/health` answers as long as the process is up; `/ready` additionally
//! round-trips a query through the database pool, so orchestrators can hold
//! traffic until the service can actually serve it.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

impl HealthResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::with_status("healthy"))
}

/// Readiness check, including database connectivity
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.services.ping_database().await {
        Ok(()) => Ok(Json(HealthResponse::with_status("ready"))),
        Err(err) => {
            tracing::error!("Readiness check failed to reach the database: {}", err);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::with_status("unavailable")),
            ))
        }
    }
}
