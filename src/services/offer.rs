use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::offer;
use crate::repositories::{OfferInclude, OfferRepository};

#[derive(Debug, Clone)]
pub struct OfferService {
    repo: OfferRepository,
}

impl OfferService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: OfferRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<offer::Details>, RepositoryError> {
        self.repo.find_all(&[OfferInclude::Plans]).await
    }

    pub async fn get(&self, id: Uuid) -> Result<offer::Details, RepositoryError> {
        self.repo.find_by_id(id, &[OfferInclude::Plans]).await
    }

    pub async fn create(&self, input: offer::Input) -> Result<offer::Model, RepositoryError> {
        validate(&input)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: offer::Input,
    ) -> Result<offer::Model, RepositoryError> {
        validate(&input)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}

fn validate(input: &offer::Input) -> Result<(), RepositoryError> {
    validation::within("discount_pct", input.discount_pct, 0.0, 100.0)?;
    validation::not_before("valid_to", input.valid_to, input.valid_from)
}
