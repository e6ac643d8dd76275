//! Offer repository for database operations

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::offer::{self, Entity as Offer};
use crate::models::plan::Entity as Plan;
use crate::models::plan_offer::Entity as PlanOffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferInclude {
    Plans,
}

#[derive(Debug, Clone)]
pub struct OfferRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OfferRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[OfferInclude],
    ) -> Result<Vec<offer::Details>, RepositoryError> {
        let offers = Offer::find()
            .order_by_asc(offer::Column::CreatedAt)
            .order_by_asc(offer::Column::Id)
            .all(&*self.db)
            .await?;
        self.hydrate(offers, include).await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[OfferInclude],
    ) -> Result<offer::Details, RepositoryError> {
        let offer = self.find_model(id).await?;
        let mut details = self.hydrate(vec![offer], include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("offer", id))
    }

    pub async fn create(&self, input: offer::Input) -> Result<offer::Model, RepositoryError> {
        let now = timestamp_now();
        let model = offer::ActiveModel {
            id: Set(Uuid::new_v4()),
            discount_pct: Set(input.discount_pct),
            valid_from: Set(input.valid_from),
            valid_to: Set(input.valid_to),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: offer::Input,
    ) -> Result<offer::Model, RepositoryError> {
        let existing = self.find_model(id).await?;
        let mut model: offer::ActiveModel = existing.clone().into();
        model.discount_pct.set_if_not_equals(input.discount_pct);
        model.valid_from.set_if_not_equals(input.valid_from);
        model.valid_to.set_if_not_equals(input.valid_to);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Offer::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("offer", id));
        }
        Ok(())
    }

    async fn find_model(&self, id: Uuid) -> Result<offer::Model, RepositoryError> {
        Offer::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("offer", id))
    }

    async fn hydrate(
        &self,
        offers: Vec<offer::Model>,
        include: &[OfferInclude],
    ) -> Result<Vec<offer::Details>, RepositoryError> {
        let mut details: Vec<offer::Details> = offers.iter().cloned().map(Into::into).collect();

        if include.contains(&OfferInclude::Plans) {
            let plans = offers.load_many_to_many(Plan, PlanOffer, &*self.db).await?;
            for (detail, plans) in details.iter_mut().zip(plans) {
                detail.plans = Some(plans);
            }
        }

        Ok(details)
    }
}
