//! # Courses API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::{assessment, course};
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All courses with their coach", body = Vec<course::Details>)),
    tag = "courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<course::Details>>, ApiError> {
    Ok(Json(state.services.courses.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course UUID")),
    responses(
        (status = 200, description = "Course", body = course::Details),
        (status = 404, description = "Course not found", body = ApiError)
    ),
    tag = "courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<course::Details>, ApiError> {
    Ok(Json(state.services.courses.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses",
    security(("bearer_auth" = [])),
    request_body = course::Input,
    responses(
        (status = 201, description = "Course created", body = course::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin or coach", body = ApiError)
    ),
    tag = "courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<course::Input>,
) -> Result<(StatusCode, Json<course::Model>), ApiError> {
    let course = state.services.courses.create(input).await?;
    info!(course_id = %course.id, coach_id = %course.coach_id, "Created course");
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course UUID")),
    request_body = course::Input,
    responses(
        (status = 200, description = "Course updated", body = course::Model),
        (status = 404, description = "Course not found", body = ApiError)
    ),
    tag = "courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<course::Input>,
) -> Result<Json<course::Model>, ApiError> {
    Ok(Json(state.services.courses.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course UUID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ApiError)
    ),
    tag = "courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.courses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assessments attempted in a course
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}/assessments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course UUID")),
    responses(
        (status = 200, description = "Assessments, possibly empty", body = Vec<assessment::Details>)
    ),
    tag = "courses"
)]
pub async fn list_course_assessments(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<assessment::Details>>, ApiError> {
    Ok(Json(state.services.assessments.list_for_course(id).await?))
}
