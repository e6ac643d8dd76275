use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::enrollment;
use crate::repositories::{EnrollmentInclude, EnrollmentRepository};

const INCLUDE: &[EnrollmentInclude] = &[EnrollmentInclude::Student, EnrollmentInclude::Batch];

#[derive(Debug, Clone)]
pub struct EnrollmentService {
    repo: EnrollmentRepository,
}

impl EnrollmentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: EnrollmentRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<enrollment::Details>, RepositoryError> {
        self.repo.find_all(INCLUDE).await
    }

    pub async fn list_for_batch(
        &self,
        batch_id: Uuid,
    ) -> Result<Vec<enrollment::Details>, RepositoryError> {
        self.repo.find_by_batch(batch_id, INCLUDE).await
    }

    pub async fn list_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<enrollment::Details>, RepositoryError> {
        self.repo.find_by_student(student_id, INCLUDE).await
    }

    pub async fn get(&self, id: Uuid) -> Result<enrollment::Details, RepositoryError> {
        self.repo.find_by_id(id, INCLUDE).await
    }

    pub async fn create(
        &self,
        input: enrollment::Input,
    ) -> Result<enrollment::Model, RepositoryError> {
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: enrollment::Input,
    ) -> Result<enrollment::Model, RepositoryError> {
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}
