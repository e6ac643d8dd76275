//! Batch repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::batch::{self, Entity as Batch};
use crate::models::venue::Entity as Venue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchInclude {
    Venue,
}

/// Fully resolved batch fields; the venue is always known by the time a row
/// is written.
#[derive(Debug, Clone)]
pub struct NewBatch {
    pub venue_id: Uuid,
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}

#[derive(Debug, Clone)]
pub struct BatchRepository {
    pub db: Arc<DatabaseConnection>,
}

impl BatchRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[BatchInclude],
    ) -> Result<Vec<batch::Details>, RepositoryError> {
        self.fetch(Batch::find(), include).await
    }

    /// Lists batches held at one venue
    pub async fn find_by_venue(
        &self,
        venue_id: Uuid,
        include: &[BatchInclude],
    ) -> Result<Vec<batch::Details>, RepositoryError> {
        self.fetch(Batch::find().filter(batch::Column::VenueId.eq(venue_id)), include)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[BatchInclude],
    ) -> Result<batch::Details, RepositoryError> {
        let mut details = self
            .fetch(Batch::find_by_id(id), include)
            .await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("batch", id))
    }

    pub async fn create(&self, input: NewBatch) -> Result<batch::Model, RepositoryError> {
        let now = timestamp_now();
        let model = batch::ActiveModel {
            id: Set(Uuid::new_v4()),
            venue_id: Set(input.venue_id),
            name: Set(input.name),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(&self, id: Uuid, input: NewBatch) -> Result<batch::Model, RepositoryError> {
        let existing = Batch::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("batch", id))?;
        let mut model: batch::ActiveModel = existing.clone().into();
        model.venue_id.set_if_not_equals(input.venue_id);
        model.name.set_if_not_equals(input.name);
        model.start_date.set_if_not_equals(input.start_date);
        model.end_date.set_if_not_equals(input.end_date);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Batch::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("batch", id));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        select: Select<Batch>,
        include: &[BatchInclude],
    ) -> Result<Vec<batch::Details>, RepositoryError> {
        let batches = select
            .order_by_asc(batch::Column::CreatedAt)
            .order_by_asc(batch::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details: Vec<batch::Details> = batches.iter().cloned().map(Into::into).collect();

        if include.contains(&BatchInclude::Venue) {
            let venues = batches.load_one(Venue, &*self.db).await?;
            for (detail, venue) in details.iter_mut().zip(venues) {
                detail.venue = venue;
            }
        }

        Ok(details)
    }
}
