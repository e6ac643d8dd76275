//! # Investments API Handlers
//!
//! Venue investments and the buy/sell transactions filed under each one.
//! Transactions are only reachable through their parent investment.

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::{investment, investment_transaction};
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/investments",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All investments with venue and investor", body = Vec<investment::Details>)),
    tag = "investments"
)]
pub async fn list_investments(
    State(state): State<AppState>,
) -> Result<Json<Vec<investment::Details>>, ApiError> {
    Ok(Json(state.services.investments.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/investments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Investment UUID")),
    responses(
        (status = 200, description = "Investment", body = investment::Details),
        (status = 404, description = "Investment not found", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn get_investment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<investment::Details>, ApiError> {
    Ok(Json(state.services.investments.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/investments",
    security(("bearer_auth" = [])),
    request_body = investment::Input,
    responses(
        (status = 201, description = "Investment created", body = investment::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin or investor", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn create_investment(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<investment::Input>,
) -> Result<(StatusCode, Json<investment::Model>), ApiError> {
    let investment = state.services.investments.create(input).await?;
    info!(investment_id = %investment.id, "Created investment");
    Ok((StatusCode::CREATED, Json(investment)))
}

#[utoipa::path(
    put,
    path = "/api/v1/investments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Investment UUID")),
    request_body = investment::Input,
    responses(
        (status = 200, description = "Investment updated", body = investment::Model),
        (status = 404, description = "Investment not found", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn update_investment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<investment::Input>,
) -> Result<Json<investment::Model>, ApiError> {
    Ok(Json(state.services.investments.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/investments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Investment UUID")),
    responses(
        (status = 204, description = "Investment deleted"),
        (status = 404, description = "Investment not found", body = ApiError),
        (status = 500, description = "Investment still has transactions", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn delete_investment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.investments.delete(id).await?;
    info!(investment_id = %id, "Deleted investment");
    Ok(StatusCode::NO_CONTENT)
}

/// List an investment's transactions, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/investments/{id}/transactions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Investment UUID")),
    responses(
        (status = 200, description = "Transactions, possibly empty", body = Vec<investment_transaction::Model>)
    ),
    tag = "investments"
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<investment_transaction::Model>>, ApiError> {
    Ok(Json(state.services.investments.list_transactions(id).await?))
}

/// Record a buy or sell against an investment
///
/// `txn_date` defaults to the current time when omitted.
#[utoipa::path(
    post,
    path = "/api/v1/investments/{id}/transactions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Investment UUID")),
    request_body = investment_transaction::Input,
    responses(
        (status = 201, description = "Transaction recorded", body = investment_transaction::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin or investor", body = ApiError),
        (status = 500, description = "Investment does not exist", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<investment_transaction::Input>,
) -> Result<(StatusCode, Json<investment_transaction::Model>), ApiError> {
    let txn = state
        .services
        .investments
        .create_transaction(id, input)
        .await?;
    info!(
        investment_id = %id,
        transaction_id = %txn.id,
        txn_type = ?txn.txn_type,
        units = txn.units,
        "Recorded investment transaction"
    );
    Ok((StatusCode::CREATED, Json(txn)))
}

#[utoipa::path(
    get,
    path = "/api/v1/investments/{id}/transactions/{txn_id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Investment UUID"),
        ("txn_id" = Uuid, Path, description = "Transaction UUID")
    ),
    responses(
        (status = 200, description = "Transaction", body = investment_transaction::Model),
        (status = 404, description = "Transaction not found under this investment", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    ApiPath((id, txn_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<investment_transaction::Model>, ApiError> {
    Ok(Json(
        state
            .services
            .investments
            .get_transaction(id, txn_id)
            .await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/investments/{id}/transactions/{txn_id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Investment UUID"),
        ("txn_id" = Uuid, Path, description = "Transaction UUID")
    ),
    request_body = investment_transaction::Input,
    responses(
        (status = 200, description = "Transaction updated", body = investment_transaction::Model),
        (status = 404, description = "Transaction not found under this investment", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    ApiPath((id, txn_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(input): ApiJson<investment_transaction::Input>,
) -> Result<Json<investment_transaction::Model>, ApiError> {
    Ok(Json(
        state
            .services
            .investments
            .update_transaction(id, txn_id, input)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/investments/{id}/transactions/{txn_id}",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Investment UUID"),
        ("txn_id" = Uuid, Path, description = "Transaction UUID")
    ),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 404, description = "Transaction not found under this investment", body = ApiError)
    ),
    tag = "investments"
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    ApiPath((id, txn_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .services
        .investments
        .delete_transaction(id, txn_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
