//! Plan entity model
//!
//! A plan is a priced membership of fixed duration. Offers are attached to
//! plans through the `plan_offers` join relation.

use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "plans")]
#[schema(as = Plan)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_days: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::offer::Entity> for Entity {
    fn to() -> RelationDef {
        super::plan_offer::Relation::Offer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::plan_offer::Relation::Plan.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = PlanDetails)]
pub struct Details {
    #[serde(flatten)]
    pub plan: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<super::offer::Model>>,
}

impl From<Model> for Details {
    fn from(plan: Model) -> Self {
        Self { plan, offers: None }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = PlanInput)]
pub struct Input {
    #[schema(example = "Quarterly")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(example = 450000)]
    pub price_cents: i64,
    #[schema(example = 90)]
    pub duration_days: i32,
}
