use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::role;
use crate::repositories::RoleRepository;

#[derive(Debug, Clone)]
pub struct RoleService {
    repo: RoleRepository,
}

impl RoleService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: RoleRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<role::Model>, RepositoryError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<role::Model, RepositoryError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, mut input: role::Input) -> Result<role::Model, RepositoryError> {
        input.name = normalize_name(&input.name)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        mut input: role::Input,
    ) -> Result<role::Model, RepositoryError> {
        input.name = normalize_name(&input.name)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}

/// Role names are matched case-insensitively against token claims, so they
/// are stored lowercase.
fn normalize_name(name: &str) -> Result<String, RepositoryError> {
    validation::non_empty("name", name)?;
    Ok(name.trim().to_lowercase())
}
