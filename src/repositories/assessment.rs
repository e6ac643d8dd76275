//! Assessment repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::assessment::{self, Entity as Assessment};
use crate::models::course::Entity as Course;
use crate::models::user::Entity as User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentInclude {
    Course,
    Student,
}

#[derive(Debug, Clone)]
pub struct AssessmentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl AssessmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[AssessmentInclude],
    ) -> Result<Vec<assessment::Details>, RepositoryError> {
        self.fetch(Assessment::find(), include).await
    }

    pub async fn find_by_course(
        &self,
        course_id: Uuid,
        include: &[AssessmentInclude],
    ) -> Result<Vec<assessment::Details>, RepositoryError> {
        self.fetch(
            Assessment::find().filter(assessment::Column::CourseId.eq(course_id)),
            include,
        )
        .await
    }

    pub async fn find_by_student(
        &self,
        student_id: Uuid,
        include: &[AssessmentInclude],
    ) -> Result<Vec<assessment::Details>, RepositoryError> {
        self.fetch(
            Assessment::find().filter(assessment::Column::StudentId.eq(student_id)),
            include,
        )
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[AssessmentInclude],
    ) -> Result<assessment::Details, RepositoryError> {
        let mut details = self.fetch(Assessment::find_by_id(id), include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("assessment", id))
    }

    pub async fn create(
        &self,
        input: assessment::Input,
    ) -> Result<assessment::Model, RepositoryError> {
        let now = timestamp_now();
        let model = assessment::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(input.course_id),
            student_id: Set(input.student_id),
            score: Set(input.score),
            attempted_at: Set(input.attempted_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: assessment::Input,
    ) -> Result<assessment::Model, RepositoryError> {
        let existing = Assessment::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("assessment", id))?;
        let mut model: assessment::ActiveModel = existing.clone().into();
        model.course_id.set_if_not_equals(input.course_id);
        model.student_id.set_if_not_equals(input.student_id);
        model.score.set_if_not_equals(input.score);
        model.attempted_at.set_if_not_equals(input.attempted_at);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Assessment::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("assessment", id));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        select: Select<Assessment>,
        include: &[AssessmentInclude],
    ) -> Result<Vec<assessment::Details>, RepositoryError> {
        let assessments = select
            .order_by_asc(assessment::Column::AttemptedAt)
            .order_by_asc(assessment::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details: Vec<assessment::Details> =
            assessments.iter().cloned().map(Into::into).collect();

        if include.contains(&AssessmentInclude::Course) {
            let courses = assessments.load_one(Course, &*self.db).await?;
            for (detail, course) in details.iter_mut().zip(courses) {
                detail.course = course;
            }
        }
        if include.contains(&AssessmentInclude::Student) {
            let students = assessments.load_one(User, &*self.db).await?;
            for (detail, student) in details.iter_mut().zip(students) {
                detail.student = student;
            }
        }

        Ok(details)
    }
}
