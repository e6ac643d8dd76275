//! Venue repository for database operations

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::venue::{self, Entity as Venue};

#[derive(Debug, Clone)]
pub struct VenueRepository {
    pub db: Arc<DatabaseConnection>,
}

impl VenueRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<venue::Model>, RepositoryError> {
        Ok(Venue::find()
            .order_by_asc(venue::Column::CreatedAt)
            .order_by_asc(venue::Column::Id)
            .all(&*self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<venue::Model, RepositoryError> {
        Venue::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("venue", id))
    }

    pub async fn create(&self, input: venue::Input) -> Result<venue::Model, RepositoryError> {
        let now = timestamp_now();
        let model = venue::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            location: Set(input.location),
            capacity: Set(input.capacity),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: venue::Input,
    ) -> Result<venue::Model, RepositoryError> {
        let existing = self.find_by_id(id).await?;
        let mut model: venue::ActiveModel = existing.clone().into();
        model.name.set_if_not_equals(input.name);
        model.location.set_if_not_equals(input.location);
        model.capacity.set_if_not_equals(input.capacity);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Venue::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("venue", id));
        }
        Ok(())
    }
}
