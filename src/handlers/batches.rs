//! # Batches API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::{batch, enrollment};
use crate::server::AppState;

/// List every batch with its venue
#[utoipa::path(
    get,
    path = "/api/v1/batches",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All batches", body = Vec<batch::Details>),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError)
    ),
    tag = "batches"
)]
pub async fn list_batches(
    State(state): State<AppState>,
) -> Result<Json<Vec<batch::Details>>, ApiError> {
    Ok(Json(state.services.batches.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/batches/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Batch UUID")),
    responses(
        (status = 200, description = "Batch with venue", body = batch::Details),
        (status = 404, description = "Batch not found", body = ApiError)
    ),
    tag = "batches"
)]
pub async fn get_batch(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<batch::Details>, ApiError> {
    Ok(Json(state.services.batches.get(id).await?))
}

/// Replace a batch. `venue_id` is required in the body.
#[utoipa::path(
    put,
    path = "/api/v1/batches/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Batch UUID")),
    request_body = batch::Input,
    responses(
        (status = 200, description = "Batch updated", body = batch::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError),
        (status = 404, description = "Batch not found", body = ApiError)
    ),
    tag = "batches"
)]
pub async fn update_batch(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<batch::Input>,
) -> Result<Json<batch::Model>, ApiError> {
    Ok(Json(state.services.batches.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/batches/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Batch UUID")),
    responses(
        (status = 204, description = "Batch deleted"),
        (status = 404, description = "Batch not found", body = ApiError)
    ),
    tag = "batches"
)]
pub async fn delete_batch(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.batches.delete(id).await?;
    info!(batch_id = %id, "Deleted batch");
    Ok(StatusCode::NO_CONTENT)
}

/// List the enrollments of a batch
#[utoipa::path(
    get,
    path = "/api/v1/batches/{batch_id}/enrollments",
    security(("bearer_auth" = [])),
    params(("batch_id" = Uuid, Path, description = "Batch UUID")),
    responses(
        (status = 200, description = "Enrollments in the batch, possibly empty", body = Vec<enrollment::Details>)
    ),
    tag = "enrollments"
)]
pub async fn list_batch_enrollments(
    State(state): State<AppState>,
    ApiPath(batch_id): ApiPath<Uuid>,
) -> Result<Json<Vec<enrollment::Details>>, ApiError> {
    Ok(Json(
        state.services.enrollments.list_for_batch(batch_id).await?,
    ))
}
