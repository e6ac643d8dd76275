//! Role repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::role::{self, Entity as Role};

/// Repository for role database operations
#[derive(Debug, Clone)]
pub struct RoleRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl RoleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<role::Model>, RepositoryError> {
        Ok(Role::find()
            .order_by_asc(role::Column::Name)
            .all(&*self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<role::Model, RepositoryError> {
        Role::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("role", id))
    }

    /// Looks a role up by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, RepositoryError> {
        Ok(Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&*self.db)
            .await?)
    }

    pub async fn create(&self, input: role::Input) -> Result<role::Model, RepositoryError> {
        let now = timestamp_now();
        let model = role::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(&self, id: Uuid, input: role::Input) -> Result<role::Model, RepositoryError> {
        let existing = self.find_by_id(id).await?;
        let mut model: role::ActiveModel = existing.clone().into();
        model.name.set_if_not_equals(input.name);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Role::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("role", id));
        }
        Ok(())
    }
}
