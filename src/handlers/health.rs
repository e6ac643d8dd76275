//! Liveness and readiness probes.

use axum::{extract::State, response::Json};
use tracing::warn;

use crate::db;
use crate::error::{ApiError, ErrorType};
use crate::models::HealthStatus;
use crate::server::AppState;

/// Liveness probe; never touches the database
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Process is alive", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

/// Readiness probe; pings the database
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Database reachable", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = ApiError)
    ),
    tag = "health"
)]
pub async fn readyz(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    db::health_check(&state.db).await.map_err(|e| {
        warn!(error = %e, "Readiness check failed");
        ApiError::from(ErrorType::ServiceUnavailable)
    })?;

    Ok(Json(HealthStatus {
        status: "ready".to_string(),
    }))
}
