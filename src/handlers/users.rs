//! # Users API Handlers
//!
//! User records with their role sets, and the per-user views over
//! enrollments, courses, assessments and investments.

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::{assessment, course, enrollment, investment, user};
use crate::server::AppState;

/// List users with their roles
#[utoipa::path(
    get,
    path = "/api/v1/users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<user::Details>),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<user::Details>>, ApiError> {
    Ok(Json(state.services.users.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User with roles", body = user::Details),
        (status = 400, description = "Malformed id", body = ApiError),
        (status = 404, description = "User not found", body = ApiError)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<user::Details>, ApiError> {
    Ok(Json(state.services.users.get(id).await?))
}

/// Create a user
///
/// `password` is required. `role_ids` sets the initial role set.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    security(("bearer_auth" = [])),
    request_body = user::Input,
    responses(
        (status = 201, description = "User created", body = user::Details),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError),
        (status = 500, description = "Duplicate email or unknown role", body = ApiError)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<user::Input>,
) -> Result<(StatusCode, Json<user::Details>), ApiError> {
    let user = state.services.users.create(input).await?;
    info!(user_id = %user.user.id, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user and its role set
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User UUID")),
    request_body = user::Input,
    responses(
        (status = 200, description = "User updated", body = user::Details),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError),
        (status = 404, description = "User not found", body = ApiError)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<user::Input>,
) -> Result<Json<user::Details>, ApiError> {
    Ok(Json(state.services.users.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User UUID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ApiError),
        (status = 500, description = "User still referenced", body = ApiError)
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.users.delete(id).await?;
    info!(user_id = %id, "Deleted user");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/enrollments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Student UUID")),
    responses(
        (status = 200, description = "Enrollments of the student", body = Vec<enrollment::Details>)
    ),
    tag = "users"
)]
pub async fn list_user_enrollments(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<enrollment::Details>>, ApiError> {
    Ok(Json(state.services.enrollments.list_for_student(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/courses",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Coach UUID")),
    responses(
        (status = 200, description = "Courses taught by the coach", body = Vec<course::Details>)
    ),
    tag = "users"
)]
pub async fn list_user_courses(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<course::Details>>, ApiError> {
    Ok(Json(state.services.courses.list_for_coach(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/assessments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Student UUID")),
    responses(
        (status = 200, description = "Assessments taken by the student", body = Vec<assessment::Details>)
    ),
    tag = "users"
)]
pub async fn list_user_assessments(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<assessment::Details>>, ApiError> {
    Ok(Json(state.services.assessments.list_for_student(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/investments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Investor UUID")),
    responses(
        (status = 200, description = "Investments held by the investor", body = Vec<investment::Details>)
    ),
    tag = "users"
)]
pub async fn list_user_investments(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<investment::Details>>, ApiError> {
    Ok(Json(state.services.investments.list_for_investor(id).await?))
}
