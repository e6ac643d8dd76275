//! Plan repository, including the plan/offer association.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Set, sea_query::OnConflict,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::offer::Entity as Offer;
use crate::models::plan::{self, Entity as Plan};
use crate::models::plan_offer::{self, Entity as PlanOffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanInclude {
    Offers,
}

/// Repository for plan database operations
#[derive(Debug, Clone)]
pub struct PlanRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PlanRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[PlanInclude],
    ) -> Result<Vec<plan::Details>, RepositoryError> {
        let plans = Plan::find()
            .order_by_asc(plan::Column::CreatedAt)
            .order_by_asc(plan::Column::Id)
            .all(&*self.db)
            .await?;
        self.hydrate(plans, include).await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[PlanInclude],
    ) -> Result<plan::Details, RepositoryError> {
        let plan = self.find_model(id).await?;
        let mut details = self.hydrate(vec![plan], include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("plan", id))
    }

    pub async fn create(&self, input: plan::Input) -> Result<plan::Model, RepositoryError> {
        let now = timestamp_now();
        let model = plan::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            description: Set(input.description),
            price_cents: Set(input.price_cents),
            duration_days: Set(input.duration_days),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(&self, id: Uuid, input: plan::Input) -> Result<plan::Model, RepositoryError> {
        let existing = self.find_model(id).await?;
        let mut model: plan::ActiveModel = existing.clone().into();
        model.name.set_if_not_equals(input.name);
        model.description.set_if_not_equals(input.description);
        model.price_cents.set_if_not_equals(input.price_cents);
        model.duration_days.set_if_not_equals(input.duration_days);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Plan::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("plan", id));
        }
        Ok(())
    }

    /// Associates an offer with a plan. Attaching twice is a no-op.
    pub async fn attach_offer(&self, plan_id: Uuid, offer_id: Uuid) -> Result<(), RepositoryError> {
        self.find_model(plan_id).await?;
        Offer::find_by_id(offer_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("offer", offer_id))?;

        let link = plan_offer::ActiveModel {
            plan_id: Set(plan_id),
            offer_id: Set(offer_id),
        };
        PlanOffer::insert(link)
            .on_conflict(
                OnConflict::columns([plan_offer::Column::PlanId, plan_offer::Column::OfferId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(())
    }

    /// Removes the association if present; detaching an unattached offer is
    /// not an error.
    pub async fn detach_offer(&self, plan_id: Uuid, offer_id: Uuid) -> Result<(), RepositoryError> {
        self.find_model(plan_id).await?;

        PlanOffer::delete_many()
            .filter(plan_offer::Column::PlanId.eq(plan_id))
            .filter(plan_offer::Column::OfferId.eq(offer_id))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn find_model(&self, id: Uuid) -> Result<plan::Model, RepositoryError> {
        Plan::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("plan", id))
    }

    async fn hydrate(
        &self,
        plans: Vec<plan::Model>,
        include: &[PlanInclude],
    ) -> Result<Vec<plan::Details>, RepositoryError> {
        let mut details: Vec<plan::Details> = plans.iter().cloned().map(Into::into).collect();

        if include.contains(&PlanInclude::Offers) {
            let offers = plans.load_many_to_many(Offer, PlanOffer, &*self.db).await?;
            for (detail, offers) in details.iter_mut().zip(offers) {
                detail.offers = Some(offers);
            }
        }

        Ok(details)
    }
}
