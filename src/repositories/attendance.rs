//! Attendance repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::attendance::{self, Entity as Attendance};
use crate::models::enrollment::Entity as Enrollment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceInclude {
    Enrollment,
}

#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pub db: Arc<DatabaseConnection>,
}

impl AttendanceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[AttendanceInclude],
    ) -> Result<Vec<attendance::Details>, RepositoryError> {
        self.fetch(Attendance::find(), include).await
    }

    pub async fn find_by_enrollment(
        &self,
        enrollment_id: Uuid,
        include: &[AttendanceInclude],
    ) -> Result<Vec<attendance::Details>, RepositoryError> {
        self.fetch(
            Attendance::find().filter(attendance::Column::EnrollmentId.eq(enrollment_id)),
            include,
        )
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[AttendanceInclude],
    ) -> Result<attendance::Details, RepositoryError> {
        let mut details = self.fetch(Attendance::find_by_id(id), include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("attendance", id))
    }

    pub async fn create(
        &self,
        input: attendance::Input,
    ) -> Result<attendance::Model, RepositoryError> {
        let now = timestamp_now();
        let model = attendance::ActiveModel {
            id: Set(Uuid::new_v4()),
            enrollment_id: Set(input.enrollment_id),
            date: Set(input.date),
            status: Set(input.status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: attendance::Input,
    ) -> Result<attendance::Model, RepositoryError> {
        let existing = Attendance::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("attendance", id))?;
        let mut model: attendance::ActiveModel = existing.clone().into();
        model.enrollment_id.set_if_not_equals(input.enrollment_id);
        model.date.set_if_not_equals(input.date);
        model.status.set_if_not_equals(input.status);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Attendance::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("attendance", id));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        select: Select<Attendance>,
        include: &[AttendanceInclude],
    ) -> Result<Vec<attendance::Details>, RepositoryError> {
        let records = select
            .order_by_asc(attendance::Column::Date)
            .order_by_asc(attendance::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        let mut details: Vec<attendance::Details> =
            records.iter().cloned().map(Into::into).collect();

        if include.contains(&AttendanceInclude::Enrollment) {
            let enrollments = records.load_one(Enrollment, &*self.db).await?;
            for (detail, enrollment) in details.iter_mut().zip(enrollments) {
                detail.enrollment = enrollment;
            }
        }

        Ok(details)
    }
}
