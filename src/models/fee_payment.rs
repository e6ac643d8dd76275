//! Fee payment entity model

use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "fee_payments")]
#[schema(as = FeePayment)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub amount_cents: i64,
    pub paid_on: NaiveDate,
    /// Free-form payment channel (`cash`, `upi`, `card`, ...)
    pub method: String,
    pub transaction_ref: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollment::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollment::Column::Id"
    )]
    Enrollment,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = FeePaymentDetails)]
pub struct Details {
    #[serde(flatten)]
    pub payment: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<super::enrollment::Model>,
}

impl From<Model> for Details {
    fn from(payment: Model) -> Self {
        Self {
            payment,
            enrollment: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = FeePaymentInput)]
pub struct Input {
    pub enrollment_id: Uuid,
    #[schema(example = 150000)]
    pub amount_cents: i64,
    #[schema(example = "2025-09-01")]
    pub paid_on: NaiveDate,
    #[schema(example = "upi")]
    pub method: String,
    #[serde(default)]
    pub transaction_ref: String,
}
