//! # Offers API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::offer;
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/offers",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All offers with the plans they apply to", body = Vec<offer::Details>)),
    tag = "offers"
)]
pub async fn list_offers(
    State(state): State<AppState>,
) -> Result<Json<Vec<offer::Details>>, ApiError> {
    Ok(Json(state.services.offers.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/offers/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Offer UUID")),
    responses(
        (status = 200, description = "Offer", body = offer::Details),
        (status = 404, description = "Offer not found", body = ApiError)
    ),
    tag = "offers"
)]
pub async fn get_offer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<offer::Details>, ApiError> {
    Ok(Json(state.services.offers.get(id).await?))
}

/// Create a discount offer. `discount_pct` must lie in 0..=100.
#[utoipa::path(
    post,
    path = "/api/v1/offers",
    security(("bearer_auth" = [])),
    request_body = offer::Input,
    responses(
        (status = 201, description = "Offer created", body = offer::Model),
        (status = 400, description = "Validation failed", body = ApiError)
    ),
    tag = "offers"
)]
pub async fn create_offer(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<offer::Input>,
) -> Result<(StatusCode, Json<offer::Model>), ApiError> {
    let offer = state.services.offers.create(input).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

#[utoipa::path(
    put,
    path = "/api/v1/offers/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Offer UUID")),
    request_body = offer::Input,
    responses(
        (status = 200, description = "Offer updated", body = offer::Model),
        (status = 404, description = "Offer not found", body = ApiError)
    ),
    tag = "offers"
)]
pub async fn update_offer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<offer::Input>,
) -> Result<Json<offer::Model>, ApiError> {
    Ok(Json(state.services.offers.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/offers/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Offer UUID")),
    responses(
        (status = 204, description = "Offer deleted"),
        (status = 404, description = "Offer not found", body = ApiError)
    ),
    tag = "offers"
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.offers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
