//! Investment transaction entity model: a single buy or sell against an
//! investment.

use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[sea_orm(string_value = "buy")]
    Buy,
    #[sea_orm(string_value = "sell")]
    Sell,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "investment_transactions")]
#[schema(as = InvestmentTransaction)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub investment_id: Uuid,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub txn_type: TransactionType,
    pub units: i32,
    pub price_cents: i64,
    pub transaction_ref: String,
    pub txn_date: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::investment::Entity",
        from = "Column::InvestmentId",
        to = "super::investment::Column::Id"
    )]
    Investment,
}

impl Related<super::investment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for a transaction; the investment comes from the path
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = InvestmentTransactionInput)]
pub struct Input {
    #[serde(rename = "type")]
    pub txn_type: TransactionType,
    #[schema(example = 2)]
    pub units: i32,
    #[schema(example = 260000)]
    pub price_cents: i64,
    #[serde(default)]
    pub transaction_ref: String,
    /// Defaults to the recording time on create; omitted on update keeps the stored date
    #[serde(default)]
    pub txn_date: Option<DateTime<FixedOffset>>,
}
