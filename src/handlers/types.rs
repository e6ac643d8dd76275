//! # Common API Types
//!
//! Extractors shared by every handler. Rejections are reported through
//! [`ApiError`] so malformed ids and bodies produce the same problem+json
//! shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Path extractor whose rejection is a 400 `VALIDATION_FAILED`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// JSON body extractor whose rejection is a 400 `VALIDATION_FAILED`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Login request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@spodemy.test")]
    pub email: String,
    pub password: String,
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Lifetime of the token in seconds
    #[schema(example = 3600)]
    pub expires_in: u64,
}
