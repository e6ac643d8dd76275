use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::expense;
use crate::repositories::ExpenseRepository;

#[derive(Debug, Clone)]
pub struct ExpenseService {
    repo: ExpenseRepository,
}

impl ExpenseService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: ExpenseRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<expense::Model>, RepositoryError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<expense::Model, RepositoryError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, input: expense::Input) -> Result<expense::Model, RepositoryError> {
        validate(&input)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: expense::Input,
    ) -> Result<expense::Model, RepositoryError> {
        validate(&input)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}

fn validate(input: &expense::Input) -> Result<(), RepositoryError> {
    validation::non_empty("description", &input.description)?;
    validation::non_negative("amount_cents", input.amount_cents)
}
