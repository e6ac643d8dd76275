use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::plan;
use crate::repositories::{PlanInclude, PlanRepository};

#[derive(Debug, Clone)]
pub struct PlanService {
    repo: PlanRepository,
}

impl PlanService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: PlanRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<plan::Details>, RepositoryError> {
        self.repo.find_all(&[PlanInclude::Offers]).await
    }

    pub async fn get(&self, id: Uuid) -> Result<plan::Details, RepositoryError> {
        self.repo.find_by_id(id, &[PlanInclude::Offers]).await
    }

    pub async fn create(&self, input: plan::Input) -> Result<plan::Model, RepositoryError> {
        validate(&input)?;
        self.repo.create(input).await
    }

    pub async fn update(&self, id: Uuid, input: plan::Input) -> Result<plan::Model, RepositoryError> {
        validate(&input)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }

    pub async fn attach_offer(&self, plan_id: Uuid, offer_id: Uuid) -> Result<(), RepositoryError> {
        self.repo.attach_offer(plan_id, offer_id).await
    }

    pub async fn detach_offer(&self, plan_id: Uuid, offer_id: Uuid) -> Result<(), RepositoryError> {
        self.repo.detach_offer(plan_id, offer_id).await
    }
}

fn validate(input: &plan::Input) -> Result<(), RepositoryError> {
    validation::non_empty("name", &input.name)?;
    validation::non_negative("price_cents", input.price_cents)?;
    validation::non_negative("duration_days", input.duration_days)
}
