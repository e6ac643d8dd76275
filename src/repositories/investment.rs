//! Investment repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::investment::{self, Entity as Investment};
use crate::models::user::Entity as User;
use crate::models::venue::Entity as Venue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentInclude {
    Venue,
    Investor,
}

#[derive(Debug, Clone)]
pub struct InvestmentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl InvestmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[InvestmentInclude],
    ) -> Result<Vec<investment::Details>, RepositoryError> {
        self.fetch(Investment::find(), include).await
    }

    pub async fn find_by_investor(
        &self,
        investor_id: Uuid,
        include: &[InvestmentInclude],
    ) -> Result<Vec<investment::Details>, RepositoryError> {
        self.fetch(
            Investment::find().filter(investment::Column::InvestorId.eq(investor_id)),
            include,
        )
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[InvestmentInclude],
    ) -> Result<investment::Details, RepositoryError> {
        let mut details = self.fetch(Investment::find_by_id(id), include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("investment", id))
    }

    pub async fn create(
        &self,
        input: investment::Input,
    ) -> Result<investment::Model, RepositoryError> {
        let now = timestamp_now();
        let model = investment::ActiveModel {
            id: Set(Uuid::new_v4()),
            venue_id: Set(input.venue_id),
            investor_id: Set(input.investor_id),
            units: Set(input.units),
            avg_price_cents: Set(input.avg_price_cents),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: investment::Input,
    ) -> Result<investment::Model, RepositoryError> {
        let existing = Investment::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("investment", id))?;
        let mut model: investment::ActiveModel = existing.clone().into();
        model.venue_id.set_if_not_equals(input.venue_id);
        model.investor_id.set_if_not_equals(input.investor_id);
        model.units.set_if_not_equals(input.units);
        model.avg_price_cents.set_if_not_equals(input.avg_price_cents);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Investment::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("investment", id));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        select: Select<Investment>,
        include: &[InvestmentInclude],
    ) -> Result<Vec<investment::Details>, RepositoryError> {
        let investments = select
            .order_by_asc(investment::Column::CreatedAt)
            .order_by_asc(investment::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details: Vec<investment::Details> =
            investments.iter().cloned().map(Into::into).collect();

        if include.contains(&InvestmentInclude::Venue) {
            let venues = investments.load_one(Venue, &*self.db).await?;
            for (detail, venue) in details.iter_mut().zip(venues) {
                detail.venue = venue;
            }
        }
        if include.contains(&InvestmentInclude::Investor) {
            let investors = investments.load_one(User, &*self.db).await?;
            for (detail, investor) in details.iter_mut().zip(investors) {
                detail.investor = investor;
            }
        }

        Ok(details)
    }
}
