use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::venue;
use crate::repositories::VenueRepository;

#[derive(Debug, Clone)]
pub struct VenueService {
    repo: VenueRepository,
}

impl VenueService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: VenueRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<venue::Model>, RepositoryError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<venue::Model, RepositoryError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, input: venue::Input) -> Result<venue::Model, RepositoryError> {
        validate(&input)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: venue::Input,
    ) -> Result<venue::Model, RepositoryError> {
        validate(&input)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}

fn validate(input: &venue::Input) -> Result<(), RepositoryError> {
    validation::non_empty("name", &input.name)?;
    validation::non_negative("capacity", input.capacity)
}
