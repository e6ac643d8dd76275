//! # Authentication API Handlers
//!
//! Exchanges an email and password for a signed bearer token.

use axum::{extract::State, response::Json};
use tracing::{error, info};

use super::types::{ApiJson, LoginRequest, LoginResponse};
use crate::error::{ApiError, unauthorized};
use crate::server::AppState;

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Malformed body", body = ApiError),
        (status = 401, description = "Unknown email or wrong password", body = ApiError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .services
        .users
        .authenticate(&request.email, &request.password)
        .await?
        .ok_or_else(|| unauthorized(Some("Invalid email or password")))?;

    let roles: Vec<String> = user
        .roles
        .unwrap_or_default()
        .into_iter()
        .map(|role| role.name)
        .collect();

    let issued = state
        .jwt
        .issue(user.user.id, &user.user.email, roles)
        .map_err(|e| {
            error!(error = %e, "Failed to sign access token");
            ApiError::from(anyhow::anyhow!("failed to sign access token"))
        })?;

    info!(user_id = %user.user.id, "Issued access token");

    Ok(Json(LoginResponse {
        access_token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in,
    }))
}
