use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::attendance;
use crate::repositories::{AttendanceInclude, AttendanceRepository};

#[derive(Debug, Clone)]
pub struct AttendanceService {
    repo: AttendanceRepository,
}

impl AttendanceService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: AttendanceRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<attendance::Details>, RepositoryError> {
        self.repo.find_all(&[AttendanceInclude::Enrollment]).await
    }

    /// Attendance rows of one enrollment; empty when there are none.
    pub async fn list_for_enrollment(
        &self,
        enrollment_id: Uuid,
    ) -> Result<Vec<attendance::Details>, RepositoryError> {
        self.repo
            .find_by_enrollment(enrollment_id, &[AttendanceInclude::Enrollment])
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<attendance::Details, RepositoryError> {
        self.repo
            .find_by_id(id, &[AttendanceInclude::Enrollment])
            .await
    }

    pub async fn create(
        &self,
        input: attendance::Input,
    ) -> Result<attendance::Model, RepositoryError> {
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: attendance::Input,
    ) -> Result<attendance::Model, RepositoryError> {
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }
}
