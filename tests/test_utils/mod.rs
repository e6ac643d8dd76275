//! Test utilities for database and HTTP testing.
//!
//! Sets up an in-memory SQLite database with migrations applied and the
//! fully wired application router on top of it.

#![allow(dead_code)]

use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use spodemy::{
    config::AppConfig,
    db::{init_pool, run_migrations},
    seeds,
    server::{AppState, create_app},
};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Configuration pointing at a private in-memory SQLite database.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        ..Default::default()
    }
}

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = init_pool(&test_config()).await?;
    run_migrations(&db).await?;
    Ok(db)
}

/// Same as [`setup_test_db`] but Arc-wrapped for repository constructors.
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    Ok(Arc::new(setup_test_db().await?))
}

/// Running application plus direct access to its state.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Migrated database with the built-in roles seeded.
    pub async fn spawn() -> Result<Self> {
        let db = setup_test_db().await?;
        seeds::seed_roles(&db).await?;

        let state = AppState::new(test_config(), db);
        let router = create_app(state.clone());
        Ok(Self { router, state })
    }

    /// Signs a token for a fresh subject holding `roles`.
    pub fn token(&self, roles: &[&str]) -> String {
        self.state
            .jwt
            .issue(
                Uuid::new_v4(),
                "tester@example.com",
                roles.iter().map(|r| r.to_string()).collect(),
            )
            .unwrap()
            .token
    }

    pub fn admin_token(&self) -> String {
        self.token(&["admin"])
    }

    /// Sends a request and returns the status with the decoded JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }

    /// Id of a seeded role by name.
    pub async fn role_id(&self, name: &str) -> Uuid {
        let (_, roles) = self.get("/api/v1/roles", &self.admin_token()).await;
        roles
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["name"] == name)
            .and_then(|r| r["id"].as_str())
            .and_then(|id| id.parse().ok())
            .unwrap()
    }

    /// Creates a user through the API and returns its id.
    pub async fn create_user(&self, email: &str, roles: &[&str]) -> Uuid {
        let mut role_ids = Vec::new();
        for role in roles {
            role_ids.push(self.role_id(role).await);
        }
        let (status, body) = self
            .post(
                "/api/v1/users",
                &self.admin_token(),
                serde_json::json!({
                    "first_name": "Test",
                    "last_name": "User",
                    "email": email,
                    "password": "correct-horse",
                    "role_ids": role_ids,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create user failed: {body}");
        id_of(&body)
    }
}

/// Parses the `id` field of a JSON entity.
pub fn id_of(body: &Value) -> Uuid {
    body["id"].as_str().unwrap().parse().unwrap()
}
