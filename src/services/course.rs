use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::course;
use crate::repositories::{CourseInclude, CourseRepository};

#[derive(Debug, Clone)]
pub struct CourseService {
    repo: CourseRepository,
}

impl CourseService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: CourseRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<course::Details>, RepositoryError> {
        self.repo.find_all(&[CourseInclude::Coach]).await
    }

    pub async fn list_for_coach(
        &self,
        coach_id: Uuid,
    ) -> Result<Vec<course::Details>, RepositoryError> {
        self.repo
            .find_by_coach(coach_id, &[CourseInclude::Coach])
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<course::Details, RepositoryError> {
        self.repo.find_by_id(id, &[CourseInclude::Coach]).await
    }

    pub async fn create(&self, input: course::Input) -> Result<course::Model, RepositoryError> {
        validation::non_empty("title", &input.title)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: course::Input,
    ) -> Result<course::Model, RepositoryError> {
        validation::non_empty("title", &input.title)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}
