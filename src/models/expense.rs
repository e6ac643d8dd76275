//! Expense entity model

use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "expenses")]
#[schema(as = Expense)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub incurred_on: NaiveDate,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = ExpenseInput)]
pub struct Input {
    #[schema(example = "Net replacement")]
    pub description: String,
    #[schema(example = 12000)]
    pub amount_cents: i64,
    #[schema(example = "2025-09-05")]
    pub incurred_on: NaiveDate,
}
