//! # Venues API Handlers
//!
//! CRUD over venues plus the batches held at each venue.

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, info};
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::{batch, venue};
use crate::server::AppState;

/// List venues
#[utoipa::path(
    get,
    path = "/api/v1/venues",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All venues", body = Vec<venue::Model>),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "venues"
)]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<Json<Vec<venue::Model>>, ApiError> {
    let venues = state.services.venues.list().await?;
    debug!("Found {} venues", venues.len());
    Ok(Json(venues))
}

/// Get a venue by ID
#[utoipa::path(
    get,
    path = "/api/v1/venues/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Venue UUID")),
    responses(
        (status = 200, description = "Venue", body = venue::Model),
        (status = 400, description = "Malformed id", body = ApiError),
        (status = 404, description = "Venue not found", body = ApiError)
    ),
    tag = "venues"
)]
pub async fn get_venue(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<venue::Model>, ApiError> {
    Ok(Json(state.services.venues.get(id).await?))
}

/// Create a venue
#[utoipa::path(
    post,
    path = "/api/v1/venues",
    security(("bearer_auth" = [])),
    request_body = venue::Input,
    responses(
        (status = 201, description = "Venue created", body = venue::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError)
    ),
    tag = "venues"
)]
pub async fn create_venue(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<venue::Input>,
) -> Result<(StatusCode, Json<venue::Model>), ApiError> {
    let venue = state.services.venues.create(input).await?;
    info!(venue_id = %venue.id, "Created venue");
    Ok((StatusCode::CREATED, Json(venue)))
}

/// Replace a venue
#[utoipa::path(
    put,
    path = "/api/v1/venues/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Venue UUID")),
    request_body = venue::Input,
    responses(
        (status = 200, description = "Venue updated", body = venue::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError),
        (status = 404, description = "Venue not found", body = ApiError)
    ),
    tag = "venues"
)]
pub async fn update_venue(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<venue::Input>,
) -> Result<Json<venue::Model>, ApiError> {
    Ok(Json(state.services.venues.update(id, input).await?))
}

/// Delete a venue
#[utoipa::path(
    delete,
    path = "/api/v1/venues/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Venue UUID")),
    responses(
        (status = 204, description = "Venue deleted"),
        (status = 404, description = "Venue not found", body = ApiError),
        (status = 500, description = "Venue still referenced", body = ApiError)
    ),
    tag = "venues"
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.venues.delete(id).await?;
    info!(venue_id = %id, "Deleted venue");
    Ok(StatusCode::NO_CONTENT)
}

/// List the batches held at a venue
#[utoipa::path(
    get,
    path = "/api/v1/venues/{venue_id}/batches",
    security(("bearer_auth" = [])),
    params(("venue_id" = Uuid, Path, description = "Venue UUID")),
    responses(
        (status = 200, description = "Batches at the venue, possibly empty", body = Vec<batch::Details>)
    ),
    tag = "batches"
)]
pub async fn list_venue_batches(
    State(state): State<AppState>,
    ApiPath(venue_id): ApiPath<Uuid>,
) -> Result<Json<Vec<batch::Details>>, ApiError> {
    Ok(Json(state.services.batches.list_for_venue(venue_id).await?))
}

/// Create a batch at a venue
///
/// The venue comes from the path. An unknown venue surfaces as a store
/// error (500), not a 404.
#[utoipa::path(
    post,
    path = "/api/v1/venues/{venue_id}/batches",
    security(("bearer_auth" = [])),
    params(("venue_id" = Uuid, Path, description = "Venue UUID")),
    request_body = batch::Input,
    responses(
        (status = 201, description = "Batch created", body = batch::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError),
        (status = 500, description = "Venue does not exist", body = ApiError)
    ),
    tag = "batches"
)]
pub async fn create_venue_batch(
    State(state): State<AppState>,
    ApiPath(venue_id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<batch::Input>,
) -> Result<(StatusCode, Json<batch::Model>), ApiError> {
    let batch = state
        .services
        .batches
        .create_for_venue(venue_id, input)
        .await?;
    info!(batch_id = %batch.id, venue_id = %venue_id, "Created batch");
    Ok((StatusCode::CREATED, Json(batch)))
}
