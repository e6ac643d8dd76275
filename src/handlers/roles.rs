//! # Roles API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::role;
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All roles", body = Vec<role::Model>)),
    tag = "roles"
)]
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<role::Model>>, ApiError> {
    Ok(Json(state.services.roles.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/roles/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Role UUID")),
    responses(
        (status = 200, description = "Role", body = role::Model),
        (status = 404, description = "Role not found", body = ApiError)
    ),
    tag = "roles"
)]
pub async fn get_role(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<role::Model>, ApiError> {
    Ok(Json(state.services.roles.get(id).await?))
}

/// Create a role. Names are stored lowercase.
#[utoipa::path(
    post,
    path = "/api/v1/roles",
    security(("bearer_auth" = [])),
    request_body = role::Input,
    responses(
        (status = 201, description = "Role created", body = role::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 500, description = "Duplicate role name", body = ApiError)
    ),
    tag = "roles"
)]
pub async fn create_role(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<role::Input>,
) -> Result<(StatusCode, Json<role::Model>), ApiError> {
    let role = state.services.roles.create(input).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

#[utoipa::path(
    put,
    path = "/api/v1/roles/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Role UUID")),
    request_body = role::Input,
    responses(
        (status = 200, description = "Role updated", body = role::Model),
        (status = 404, description = "Role not found", body = ApiError)
    ),
    tag = "roles"
)]
pub async fn update_role(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<role::Input>,
) -> Result<Json<role::Model>, ApiError> {
    Ok(Json(state.services.roles.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/roles/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Role UUID")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 404, description = "Role not found", body = ApiError)
    ),
    tag = "roles"
)]
pub async fn delete_role(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.roles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
