use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::fee_payment;
use crate::repositories::{FeePaymentInclude, FeePaymentRepository};

#[derive(Debug, Clone)]
pub struct PaymentService {
    repo: FeePaymentRepository,
}

impl PaymentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: FeePaymentRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<fee_payment::Details>, RepositoryError> {
        self.repo.find_all(&[FeePaymentInclude::Enrollment]).await
    }

    pub async fn list_for_enrollment(
        &self,
        enrollment_id: Uuid,
    ) -> Result<Vec<fee_payment::Details>, RepositoryError> {
        self.repo
            .find_by_enrollment(enrollment_id, &[FeePaymentInclude::Enrollment])
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<fee_payment::Details, RepositoryError> {
        self.repo
            .find_by_id(id, &[FeePaymentInclude::Enrollment])
            .await
    }

    pub async fn create(
        &self,
        input: fee_payment::Input,
    ) -> Result<fee_payment::Model, RepositoryError> {
        validate(&input)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: fee_payment::Input,
    ) -> Result<fee_payment::Model, RepositoryError> {
        validate(&input)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}

fn validate(input: &fee_payment::Input) -> Result<(), RepositoryError> {
    validation::non_negative("amount_cents", input.amount_cents)?;
    validation::non_empty("method", &input.method)
}
