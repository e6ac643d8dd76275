//! Investment entity model
//!
//! An investment is a user's fractional stake in a venue, tracked as a unit
//! count and an average unit price.

use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "investments")]
#[schema(as = Investment)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub venue_id: Uuid,
    pub investor_id: Uuid,
    pub units: i32,
    pub avg_price_cents: i64,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id"
    )]
    Venue,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InvestorId",
        to = "super::user::Column::Id"
    )]
    Investor,
    #[sea_orm(has_many = "super::investment_transaction::Entity")]
    Transactions,
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investor.def()
    }
}

impl Related<super::investment_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = InvestmentDetails)]
pub struct Details {
    #[serde(flatten)]
    pub investment: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<super::venue::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor: Option<super::user::Model>,
}

impl From<Model> for Details {
    fn from(investment: Model) -> Self {
        Self {
            investment,
            venue: None,
            investor: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = InvestmentInput)]
pub struct Input {
    pub venue_id: Uuid,
    pub investor_id: Uuid,
    #[schema(example = 10)]
    pub units: i32,
    #[schema(example = 250000)]
    pub avg_price_cents: i64,
}
