//! # Attendance API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::debug;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::attendance;
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All attendance rows", body = Vec<attendance::Details>)
    ),
    tag = "attendance"
)]
pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<attendance::Details>>, ApiError> {
    Ok(Json(state.services.attendance.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/attendance/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Attendance UUID")),
    responses(
        (status = 200, description = "Attendance row", body = attendance::Details),
        (status = 404, description = "Attendance not found", body = ApiError)
    ),
    tag = "attendance"
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<attendance::Details>, ApiError> {
    Ok(Json(state.services.attendance.get(id).await?))
}

/// Record attendance for an enrollment on a date
#[utoipa::path(
    post,
    path = "/api/v1/attendance",
    security(("bearer_auth" = [])),
    request_body = attendance::Input,
    responses(
        (status = 201, description = "Attendance recorded", body = attendance::Model),
        (status = 400, description = "Malformed body or unknown status", body = ApiError),
        (status = 403, description = "Requires admin or coach", body = ApiError)
    ),
    tag = "attendance"
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<attendance::Input>,
) -> Result<(StatusCode, Json<attendance::Model>), ApiError> {
    let record = state.services.attendance.create(input).await?;
    debug!(attendance_id = %record.id, "Recorded attendance");
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/api/v1/attendance/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Attendance UUID")),
    request_body = attendance::Input,
    responses(
        (status = 200, description = "Attendance updated", body = attendance::Model),
        (status = 404, description = "Attendance not found", body = ApiError)
    ),
    tag = "attendance"
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<attendance::Input>,
) -> Result<Json<attendance::Model>, ApiError> {
    Ok(Json(state.services.attendance.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/attendance/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Attendance UUID")),
    responses(
        (status = 204, description = "Attendance deleted"),
        (status = 404, description = "Attendance not found", body = ApiError)
    ),
    tag = "attendance"
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.attendance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
