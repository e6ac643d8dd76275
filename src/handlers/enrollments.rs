//! # Enrollments API Handlers
//!
//! Enrollments tie a student to a batch. Attendance and fee payments are
//! reachable beneath each enrollment.

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::{attendance, enrollment, fee_payment};
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/enrollments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All enrollments with student and batch", body = Vec<enrollment::Details>)
    ),
    tag = "enrollments"
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> Result<Json<Vec<enrollment::Details>>, ApiError> {
    Ok(Json(state.services.enrollments.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/enrollments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Enrollment UUID")),
    responses(
        (status = 200, description = "Enrollment", body = enrollment::Details),
        (status = 404, description = "Enrollment not found", body = ApiError)
    ),
    tag = "enrollments"
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<enrollment::Details>, ApiError> {
    Ok(Json(state.services.enrollments.get(id).await?))
}

/// Enroll a student in a batch
#[utoipa::path(
    post,
    path = "/api/v1/enrollments",
    security(("bearer_auth" = [])),
    request_body = enrollment::Input,
    responses(
        (status = 201, description = "Enrollment created", body = enrollment::Model),
        (status = 400, description = "Malformed body or unknown status", body = ApiError),
        (status = 403, description = "Requires admin or coach", body = ApiError)
    ),
    tag = "enrollments"
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<enrollment::Input>,
) -> Result<(StatusCode, Json<enrollment::Model>), ApiError> {
    let enrollment = state.services.enrollments.create(input).await?;
    info!(enrollment_id = %enrollment.id, "Created enrollment");
    Ok((StatusCode::CREATED, Json(enrollment)))
}

#[utoipa::path(
    put,
    path = "/api/v1/enrollments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Enrollment UUID")),
    request_body = enrollment::Input,
    responses(
        (status = 200, description = "Enrollment updated", body = enrollment::Model),
        (status = 404, description = "Enrollment not found", body = ApiError)
    ),
    tag = "enrollments"
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<enrollment::Input>,
) -> Result<Json<enrollment::Model>, ApiError> {
    Ok(Json(state.services.enrollments.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/enrollments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Enrollment UUID")),
    responses(
        (status = 204, description = "Enrollment deleted"),
        (status = 404, description = "Enrollment not found", body = ApiError)
    ),
    tag = "enrollments"
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.enrollments.delete(id).await?;
    info!(enrollment_id = %id, "Deleted enrollment");
    Ok(StatusCode::NO_CONTENT)
}

/// Attendance recorded against an enrollment
#[utoipa::path(
    get,
    path = "/api/v1/enrollments/{enrollment_id}/attendance",
    security(("bearer_auth" = [])),
    params(("enrollment_id" = Uuid, Path, description = "Enrollment UUID")),
    responses(
        (status = 200, description = "Attendance rows, possibly empty", body = Vec<attendance::Details>)
    ),
    tag = "attendance"
)]
pub async fn list_enrollment_attendance(
    State(state): State<AppState>,
    ApiPath(enrollment_id): ApiPath<Uuid>,
) -> Result<Json<Vec<attendance::Details>>, ApiError> {
    Ok(Json(
        state
            .services
            .attendance
            .list_for_enrollment(enrollment_id)
            .await?,
    ))
}

/// Fee payments made against an enrollment
#[utoipa::path(
    get,
    path = "/api/v1/enrollments/{enrollment_id}/payments",
    security(("bearer_auth" = [])),
    params(("enrollment_id" = Uuid, Path, description = "Enrollment UUID")),
    responses(
        (status = 200, description = "Payments, possibly empty", body = Vec<fee_payment::Details>)
    ),
    tag = "payments"
)]
pub async fn list_enrollment_payments(
    State(state): State<AppState>,
    ApiPath(enrollment_id): ApiPath<Uuid>,
) -> Result<Json<Vec<fee_payment::Details>>, ApiError> {
    Ok(Json(
        state
            .services
            .payments
            .list_for_enrollment(enrollment_id)
            .await?,
    ))
}
