//! Expense repository for database operations

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::expense::{self, Entity as Expense};

#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ExpenseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<expense::Model>, RepositoryError> {
        Ok(Expense::find()
            .order_by_asc(expense::Column::IncurredOn)
            .order_by_asc(expense::Column::CreatedAt)
            .all(&*self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<expense::Model, RepositoryError> {
        Expense::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("expense", id))
    }

    pub async fn create(&self, input: expense::Input) -> Result<expense::Model, RepositoryError> {
        let now = timestamp_now();
        let model = expense::ActiveModel {
            id: Set(Uuid::new_v4()),
            description: Set(input.description),
            amount_cents: Set(input.amount_cents),
            incurred_on: Set(input.incurred_on),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: expense::Input,
    ) -> Result<expense::Model, RepositoryError> {
        let existing = self.find_by_id(id).await?;
        let mut model: expense::ActiveModel = existing.clone().into();
        model.description.set_if_not_equals(input.description);
        model.amount_cents.set_if_not_equals(input.amount_cents);
        model.incurred_on.set_if_not_equals(input.incurred_on);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Expense::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("expense", id));
        }
        Ok(())
    }
}
