//! Offer entity model

use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "offers")]
#[schema(as = Offer)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Discount percentage in `0..=100`
    pub discount_pct: f64,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        super::plan_offer::Relation::Plan.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::plan_offer::Relation::Offer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = OfferDetails)]
pub struct Details {
    #[serde(flatten)]
    pub offer: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans: Option<Vec<super::plan::Model>>,
}

impl From<Model> for Details {
    fn from(offer: Model) -> Self {
        Self { offer, plans: None }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = OfferInput)]
pub struct Input {
    #[schema(example = 15.0)]
    pub discount_pct: f64,
    #[schema(example = "2025-08-01")]
    pub valid_from: NaiveDate,
    #[schema(example = "2025-08-31")]
    pub valid_to: NaiveDate,
}
