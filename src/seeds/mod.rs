//! Database seeding functionality
//!
//! Populates the role catalogue and, when configured, a bootstrap
//! administrator so a fresh deployment can obtain its first token.

use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::RoleName;
use crate::config::AppConfig;
use crate::models::{role, user};
use crate::repositories::{RoleRepository, UserRepository};
use crate::services::user::hash_password;

/// Runs every seed step in order.
pub async fn seed_all(db: &DatabaseConnection, config: &AppConfig) -> Result<()> {
    let admin_role_id = seed_roles(db).await?;

    if let (Some(email), Some(password)) = (
        config.bootstrap_admin_email.as_deref(),
        config.bootstrap_admin_password.as_deref(),
    ) {
        seed_bootstrap_admin(db, email, password, admin_role_id).await?;
    }

    Ok(())
}

/// Ensures the four built-in roles exist, returning the id of `admin`.
pub async fn seed_roles(db: &DatabaseConnection) -> Result<Uuid> {
    let repo = RoleRepository::new(Arc::new(db.clone()));
    let mut admin_id = None;

    for name in RoleName::ALL {
        let existing = repo
            .find_by_name(name.as_str())
            .await
            .with_context(|| format!("Failed to look up role '{}'", name))?;

        let role = match existing {
            Some(role) => {
                log::info!("Role '{}' already exists, skipping", name);
                role
            }
            None => {
                log::info!("Creating role: {}", name);
                repo.create(role::Input {
                    name: name.as_str().to_string(),
                })
                .await
                .with_context(|| format!("Failed to create role '{}'", name))?
            }
        };

        if name == RoleName::Admin {
            admin_id = Some(role.id);
        }
    }

    admin_id.context("admin role missing after seeding")
}

/// Creates the bootstrap administrator unless a user with that email exists.
///
/// An existing account keeps its password but is granted the admin role.
pub async fn seed_bootstrap_admin(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
    admin_role_id: Uuid,
) -> Result<()> {
    let repo = UserRepository::new(Arc::new(db.clone()));
    let email = email.trim().to_lowercase();

    if let Some(existing) = repo.find_by_email(&email).await? {
        log::info!("Bootstrap admin '{}' already exists, skipping", email);
        repo.add_role(existing.id, admin_role_id).await?;
        return Ok(());
    }

    let password_hash = hash_password(password)?;
    let input = user::Input {
        first_name: "Admin".to_string(),
        last_name: "User".to_string(),
        email: email.clone(),
        password: None,
        role_ids: vec![admin_role_id],
    };

    repo.create(&input, password_hash)
        .await
        .with_context(|| format!("Failed to create bootstrap admin '{}'", email))?;
    log::info!("Created bootstrap admin: {}", email);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_pool, run_migrations};
    use crate::repositories::UserInclude;

    async fn memory_db() -> DatabaseConnection {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            ..Default::default()
        };
        let db = init_pool(&config).await.unwrap();
        run_migrations(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_seed_roles_is_idempotent() {
        let db = memory_db().await;

        let first = seed_roles(&db).await.unwrap();
        let second = seed_roles(&db).await.unwrap();
        assert_eq!(first, second);

        let roles = RoleRepository::new(Arc::new(db)).find_all().await.unwrap();
        let mut names: Vec<_> = roles.into_iter().map(|r| r.name).collect();
        names.sort();
        assert_eq!(names, vec!["admin", "coach", "investor", "student"]);
    }

    #[tokio::test]
    async fn test_bootstrap_admin_created_once() {
        let db = memory_db().await;
        let config = AppConfig {
            bootstrap_admin_email: Some("Root@Example.com".to_string()),
            bootstrap_admin_password: Some("changeme-please".to_string()),
            ..Default::default()
        };

        seed_all(&db, &config).await.unwrap();
        seed_all(&db, &config).await.unwrap();

        let repo = UserRepository::new(Arc::new(db));
        let users = repo.find_all(&[UserInclude::Roles]).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user.email, "root@example.com");
        let roles = users[0].roles.as_ref().unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name, "admin");
    }
}
