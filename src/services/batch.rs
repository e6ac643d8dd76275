//! Batch service. Batches are created under a venue; the venue id comes from
//! the request path on create and from the body on update.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::batch;
use crate::repositories::{BatchInclude, BatchRepository, NewBatch};

#[derive(Debug, Clone)]
pub struct BatchService {
    repo: BatchRepository,
}

impl BatchService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: BatchRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<batch::Details>, RepositoryError> {
        self.repo.find_all(&[BatchInclude::Venue]).await
    }

    pub async fn list_for_venue(
        &self,
        venue_id: Uuid,
    ) -> Result<Vec<batch::Details>, RepositoryError> {
        self.repo
            .find_by_venue(venue_id, &[BatchInclude::Venue])
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<batch::Details, RepositoryError> {
        self.repo.find_by_id(id, &[BatchInclude::Venue]).await
    }

    /// Creates a batch at `venue_id`; any venue id in the body is ignored.
    pub async fn create_for_venue(
        &self,
        venue_id: Uuid,
        input: batch::Input,
    ) -> Result<batch::Model, RepositoryError> {
        let batch = resolve(venue_id, input)?;
        self.repo.create(batch).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: batch::Input,
    ) -> Result<batch::Model, RepositoryError> {
        let venue_id = input
            .venue_id
            .ok_or_else(|| RepositoryError::validation("venue_id", "is required"))?;
        let batch = resolve(venue_id, input)?;
        self.repo.update(id, batch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}

fn resolve(venue_id: Uuid, input: batch::Input) -> Result<NewBatch, RepositoryError> {
    validation::non_empty("name", &input.name)?;
    validation::not_before("end_date", input.end_date, input.start_date)?;

    Ok(NewBatch {
        venue_id,
        name: input.name,
        start_date: input.start_date,
        end_date: input.end_date,
    })
}
