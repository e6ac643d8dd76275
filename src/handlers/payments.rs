//! # Fee Payments API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::fee_payment;
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/payments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All fee payments", body = Vec<fee_payment::Details>)
    ),
    tag = "payments"
)]
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<fee_payment::Details>>, ApiError> {
    Ok(Json(state.services.payments.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/payments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Payment UUID")),
    responses(
        (status = 200, description = "Fee payment", body = fee_payment::Details),
        (status = 404, description = "Payment not found", body = ApiError)
    ),
    tag = "payments"
)]
pub async fn get_payment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<fee_payment::Details>, ApiError> {
    Ok(Json(state.services.payments.get(id).await?))
}

/// Record a fee payment
#[utoipa::path(
    post,
    path = "/api/v1/payments",
    security(("bearer_auth" = [])),
    request_body = fee_payment::Input,
    responses(
        (status = 201, description = "Payment recorded", body = fee_payment::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError)
    ),
    tag = "payments"
)]
pub async fn create_payment(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<fee_payment::Input>,
) -> Result<(StatusCode, Json<fee_payment::Model>), ApiError> {
    let payment = state.services.payments.create(input).await?;
    info!(
        payment_id = %payment.id,
        enrollment_id = %payment.enrollment_id,
        amount_cents = payment.amount_cents,
        "Recorded fee payment"
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    put,
    path = "/api/v1/payments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Payment UUID")),
    request_body = fee_payment::Input,
    responses(
        (status = 200, description = "Payment updated", body = fee_payment::Model),
        (status = 404, description = "Payment not found", body = ApiError)
    ),
    tag = "payments"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<fee_payment::Input>,
) -> Result<Json<fee_payment::Model>, ApiError> {
    Ok(Json(state.services.payments.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/payments/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Payment UUID")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Payment not found", body = ApiError)
    ),
    tag = "payments"
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.payments.delete(id).await?;
    info!(payment_id = %id, "Deleted fee payment");
    Ok(StatusCode::NO_CONTENT)
}
