//! Course repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::course::{self, Entity as Course};
use crate::models::user::Entity as User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseInclude {
    Coach,
}

#[derive(Debug, Clone)]
pub struct CourseRepository {
    pub db: Arc<DatabaseConnection>,
}

impl CourseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[CourseInclude],
    ) -> Result<Vec<course::Details>, RepositoryError> {
        self.fetch(Course::find(), include).await
    }

    pub async fn find_by_coach(
        &self,
        coach_id: Uuid,
        include: &[CourseInclude],
    ) -> Result<Vec<course::Details>, RepositoryError> {
        self.fetch(Course::find().filter(course::Column::CoachId.eq(coach_id)), include)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[CourseInclude],
    ) -> Result<course::Details, RepositoryError> {
        let mut details = self.fetch(Course::find_by_id(id), include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("course", id))
    }

    pub async fn create(&self, input: course::Input) -> Result<course::Model, RepositoryError> {
        let now = timestamp_now();
        let model = course::ActiveModel {
            id: Set(Uuid::new_v4()),
            coach_id: Set(input.coach_id),
            title: Set(input.title),
            description: Set(input.description),
            content_url: Set(input.content_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: course::Input,
    ) -> Result<course::Model, RepositoryError> {
        let existing = Course::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("course", id))?;
        let mut model: course::ActiveModel = existing.clone().into();
        model.coach_id.set_if_not_equals(input.coach_id);
        model.title.set_if_not_equals(input.title);
        model.description.set_if_not_equals(input.description);
        model.content_url.set_if_not_equals(input.content_url);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Course::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("course", id));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        select: Select<Course>,
        include: &[CourseInclude],
    ) -> Result<Vec<course::Details>, RepositoryError> {
        let courses = select
            .order_by_asc(course::Column::CreatedAt)
            .order_by_asc(course::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details: Vec<course::Details> = courses.iter().cloned().map(Into::into).collect();

        if include.contains(&CourseInclude::Coach) {
            let coaches = courses.load_one(User, &*self.db).await?;
            for (detail, coach) in details.iter_mut().zip(coaches) {
                detail.coach = coach;
            }
        }

        Ok(details)
    }
}
