//! # Expenses API Handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::types::{ApiJson, ApiPath};
use crate::error::ApiError;
use crate::models::expense;
use crate::server::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/expenses",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All expenses", body = Vec<expense::Model>)),
    tag = "expenses"
)]
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<expense::Model>>, ApiError> {
    Ok(Json(state.services.expenses.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/expenses/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Expense UUID")),
    responses(
        (status = 200, description = "Expense", body = expense::Model),
        (status = 404, description = "Expense not found", body = ApiError)
    ),
    tag = "expenses"
)]
pub async fn get_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<expense::Model>, ApiError> {
    Ok(Json(state.services.expenses.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/expenses",
    security(("bearer_auth" = [])),
    request_body = expense::Input,
    responses(
        (status = 201, description = "Expense recorded", body = expense::Model),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 403, description = "Requires admin", body = ApiError)
    ),
    tag = "expenses"
)]
pub async fn create_expense(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<expense::Input>,
) -> Result<(StatusCode, Json<expense::Model>), ApiError> {
    let expense = state.services.expenses.create(input).await?;
    info!(expense_id = %expense.id, amount_cents = expense.amount_cents, "Recorded expense");
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    put,
    path = "/api/v1/expenses/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Expense UUID")),
    request_body = expense::Input,
    responses(
        (status = 200, description = "Expense updated", body = expense::Model),
        (status = 404, description = "Expense not found", body = ApiError)
    ),
    tag = "expenses"
)]
pub async fn update_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<expense::Input>,
) -> Result<Json<expense::Model>, ApiError> {
    Ok(Json(state.services.expenses.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/expenses/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Expense UUID")),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 404, description = "Expense not found", body = ApiError)
    ),
    tag = "expenses"
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.services.expenses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
