//! Enrollment repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::batch::Entity as Batch;
use crate::models::enrollment::{self, Entity as Enrollment};
use crate::models::user::Entity as User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentInclude {
    Student,
    Batch,
}

#[derive(Debug, Clone)]
pub struct EnrollmentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl EnrollmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[EnrollmentInclude],
    ) -> Result<Vec<enrollment::Details>, RepositoryError> {
        self.fetch(Enrollment::find(), include).await
    }

    pub async fn find_by_batch(
        &self,
        batch_id: Uuid,
        include: &[EnrollmentInclude],
    ) -> Result<Vec<enrollment::Details>, RepositoryError> {
        self.fetch(
            Enrollment::find().filter(enrollment::Column::BatchId.eq(batch_id)),
            include,
        )
        .await
    }

    pub async fn find_by_student(
        &self,
        student_id: Uuid,
        include: &[EnrollmentInclude],
    ) -> Result<Vec<enrollment::Details>, RepositoryError> {
        self.fetch(
            Enrollment::find().filter(enrollment::Column::StudentId.eq(student_id)),
            include,
        )
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[EnrollmentInclude],
    ) -> Result<enrollment::Details, RepositoryError> {
        let mut details = self.fetch(Enrollment::find_by_id(id), include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("enrollment", id))
    }

    pub async fn create(
        &self,
        input: enrollment::Input,
    ) -> Result<enrollment::Model, RepositoryError> {
        let now = timestamp_now();
        let model = enrollment::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(input.student_id),
            batch_id: Set(input.batch_id),
            enrolled_on: Set(input.enrolled_on),
            status: Set(input.status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: enrollment::Input,
    ) -> Result<enrollment::Model, RepositoryError> {
        let existing = Enrollment::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("enrollment", id))?;
        let mut model: enrollment::ActiveModel = existing.clone().into();
        model.student_id.set_if_not_equals(input.student_id);
        model.batch_id.set_if_not_equals(input.batch_id);
        model.enrolled_on.set_if_not_equals(input.enrolled_on);
        model.status.set_if_not_equals(input.status);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Enrollment::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("enrollment", id));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        select: Select<Enrollment>,
        include: &[EnrollmentInclude],
    ) -> Result<Vec<enrollment::Details>, RepositoryError> {
        let enrollments = select
            .order_by_asc(enrollment::Column::CreatedAt)
            .order_by_asc(enrollment::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details: Vec<enrollment::Details> =
            enrollments.iter().cloned().map(Into::into).collect();

        if include.contains(&EnrollmentInclude::Student) {
            let students = enrollments.load_one(User, &*self.db).await?;
            for (detail, student) in details.iter_mut().zip(students) {
                detail.student = student;
            }
        }
        if include.contains(&EnrollmentInclude::Batch) {
            let batches = enrollments.load_one(Batch, &*self.db).await?;
            for (detail, batch) in details.iter_mut().zip(batches) {
                detail.batch = batch;
            }
        }

        Ok(details)
    }
}
