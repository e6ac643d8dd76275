//! # Assessments API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::assessment;
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/assessments",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All assessments", body = Vec<assessment::Details>)),
    tag = "assessments"
)]
pub async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<assessment::Details>>, ApiError> {
    Ok(Json(state.services.assessments.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/assessments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Assessment UUID")),
    responses(
        (status = 200, description = "Assessment", body = assessment::Details),
        (status = 404, description = "Assessment not found", body = ApiError)
    ),
    tag = "assessments"
)]
pub async fn get_assessment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<assessment::Details>, ApiError> {
    Ok(Json(state.services.assessments.get(id).await?))
}

/// Record an assessment score (0 to 100)
#[utoipa::path(
    post,
    path = "/api/v1/assessments",
    security(("bearer_auth" = [])),
    request_body = assessment::Input,
    responses(
        (status = 201, description = "Assessment recorded", body = assessment::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin or coach", body = ApiError)
    ),
    tag = "assessments"
)]
pub async fn create_assessment(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<assessment::Input>,
) -> Result<(StatusCode, Json<assessment::Model>), ApiError> {
    let assessment = state.services.assessments.create(input).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

#[utoipa::path(
    put,
    path = "/api/v1/assessments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Assessment UUID")),
    request_body = assessment::Input,
    responses(
        (status = 200, description = "Assessment updated", body = assessment::Model),
        (status = 404, description = "Assessment not found", body = ApiError)
    ),
    tag = "assessments"
)]
pub async fn update_assessment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<assessment::Input>,
) -> Result<Json<assessment::Model>, ApiError> {
    Ok(Json(state.services.assessments.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/assessments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Assessment UUID")),
    responses(
        (status = 204, description = "Assessment deleted"),
        (status = 404, description = "Assessment not found", body = ApiError)
    ),
    tag = "assessments"
)]
pub async fn delete_assessment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.assessments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
