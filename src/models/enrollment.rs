//! Enrollment entity model
//!
//! An enrollment ties a student (user) to a batch. Attendance and fee payments
//! hang off the enrollment.

use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle state of an enrollment
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "dropped")]
    Dropped,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "enrollments")]
#[schema(as = Enrollment)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub batch_id: Uuid,
    pub enrolled_on: NaiveDate,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id"
    )]
    Batch,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::fee_payment::Entity")]
    FeePayments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::fee_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeePayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = EnrollmentDetails)]
pub struct Details {
    #[serde(flatten)]
    pub enrollment: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<super::user::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<super::batch::Model>,
}

impl From<Model> for Details {
    fn from(enrollment: Model) -> Self {
        Self {
            enrollment,
            student: None,
            batch: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = EnrollmentInput)]
pub struct Input {
    pub student_id: Uuid,
    pub batch_id: Uuid,
    #[schema(example = "2025-09-01")]
    pub enrolled_on: NaiveDate,
    #[serde(default)]
    pub status: EnrollmentStatus,
}
