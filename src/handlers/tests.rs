//! # Tests for Handlers

use crate::handlers::{health::healthz, root};
use axum::response::Json;

#[tokio::test]
async fn test_root_handler_returns_expected_service_info() {
    let Json(service_info) = root().await;

    assert_eq!(service_info.service, "spodemy");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_healthz_reports_ok() {
    let Json(status) = healthz().await;
    assert_eq!(status.status, "ok");
}

#[test]
fn test_service_info_serializes_both_fields() {
    let value = serde_json::to_value(crate::models::ServiceInfo::default()).unwrap();
    assert_eq!(value["service"], "spodemy");
    assert!(value["version"].is_string());
}
