use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::assessment;
use crate::repositories::{AssessmentInclude, AssessmentRepository};

const INCLUDE: &[AssessmentInclude] = &[AssessmentInclude::Course, AssessmentInclude::Student];

#[derive(Debug, Clone)]
pub struct AssessmentService {
    repo: AssessmentRepository,
}

impl AssessmentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: AssessmentRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<assessment::Details>, RepositoryError> {
        self.repo.find_all(INCLUDE).await
    }

    pub async fn list_for_course(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<assessment::Details>, RepositoryError> {
        self.repo.find_by_course(course_id, INCLUDE).await
    }

    pub async fn list_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<assessment::Details>, RepositoryError> {
        self.repo.find_by_student(student_id, INCLUDE).await
    }

    pub async fn get(&self, id: Uuid) -> Result<assessment::Details, RepositoryError> {
        self.repo.find_by_id(id, INCLUDE).await
    }

    pub async fn create(
        &self,
        input: assessment::Input,
    ) -> Result<assessment::Model, RepositoryError> {
        validation::within("score", input.score, 0.0, 100.0)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: assessment::Input,
    ) -> Result<assessment::Model, RepositoryError> {
        validation::within("score", input.score, 0.0, 100.0)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}
