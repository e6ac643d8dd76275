//! # API Handlers
//!
//! HTTP endpoint handlers for the academy API, one module per resource.

use crate::models::ServiceInfo;
use axum::response::Json;

pub mod assessments;
pub mod attendance;
pub mod auth;
pub mod batches;
pub mod courses;
pub mod enrollments;
pub mod expenses;
pub mod health;
pub mod investments;
pub mod offers;
pub mod payments;
pub mod plans;
pub mod roles;
pub mod types;
pub mod users;
pub mod venues;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

#[cfg(test)]
mod tests;
