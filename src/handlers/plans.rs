//! # Plans API Handlers
//!
//! Fee plans and the offers attached to them. Attach and detach are set
//! operations: repeating either leaves the association unchanged.

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::plan;
use crate::server::AppState;

/// List plans with their attached offers
#[utoipa::path(
    get,
    path = "/api/v1/plans",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All plans", body = Vec<plan::Details>)),
    tag = "plans"
)]
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<plan::Details>>, ApiError> {
    Ok(Json(state.services.plans.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/plans/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Plan UUID")),
    responses(
        (status = 200, description = "Plan with offers", body = plan::Details),
        (status = 404, description = "Plan not found", body = ApiError)
    ),
    tag = "plans"
)]
pub async fn get_plan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<plan::Details>, ApiError> {
    Ok(Json(state.services.plans.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/plans",
    security(("bearer_auth" = [])),
    request_body = plan::Input,
    responses(
        (status = 201, description = "Plan created", body = plan::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError)
    ),
    tag = "plans"
)]
pub async fn create_plan(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<plan::Input>,
) -> Result<(StatusCode, Json<plan::Model>), ApiError> {
    let plan = state.services.plans.create(input).await?;
    info!(plan_id = %plan.id, "Created plan");
    Ok((StatusCode::CREATED, Json(plan)))
}

#[utoipa::path(
    put,
    path = "/api/v1/plans/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Plan UUID")),
    request_body = plan::Input,
    responses(
        (status = 200, description = "Plan updated", body = plan::Model),
        (status = 404, description = "Plan not found", body = ApiError)
    ),
    tag = "plans"
)]
pub async fn update_plan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<plan::Input>,
) -> Result<Json<plan::Model>, ApiError> {
    Ok(Json(state.services.plans.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/plans/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Plan UUID")),
    responses(
        (status = 204, description = "Plan deleted along with its offer links"),
        (status = 404, description = "Plan not found", body = ApiError)
    ),
    tag = "plans"
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.plans.delete(id).await?;
    info!(plan_id = %id, "Deleted plan");
    Ok(StatusCode::NO_CONTENT)
}

/// Attach an offer to a plan
#[utoipa::path(
    put,
    path = "/api/v1/plans/{id}/offers/{offer_id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Plan UUID"),
        ("offer_id" = Uuid, Path, description = "Offer UUID")
    ),
    responses(
        (status = 204, description = "Offer attached"),
        (status = 404, description = "Plan or offer not found", body = ApiError)
    ),
    tag = "plans"
)]
pub async fn attach_offer(
    State(state): State<AppState>,
    ApiPath((plan_id, offer_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.services.plans.attach_offer(plan_id, offer_id).await?;
    info!(plan_id = %plan_id, offer_id = %offer_id, "Attached offer to plan");
    Ok(StatusCode::NO_CONTENT)
}

/// Detach an offer from a plan
#[utoipa::path(
    delete,
    path = "/api/v1/plans/{id}/offers/{offer_id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Plan UUID"),
        ("offer_id" = Uuid, Path, description = "Offer UUID")
    ),
    responses(
        (status = 204, description = "Offer detached, or was not attached"),
        (status = 404, description = "Plan not found", body = ApiError)
    ),
    tag = "plans"
)]
pub async fn detach_offer(
    State(state): State<AppState>,
    ApiPath((plan_id, offer_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.services.plans.detach_offer(plan_id, offer_id).await?;
    info!(plan_id = %plan_id, offer_id = %offer_id, "Detached offer from plan");
    Ok(StatusCode::NO_CONTENT)
}
