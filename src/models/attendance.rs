//! Attendance entity model: one row per enrollment per session date.

use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "attendance")]
#[schema(as = Attendance)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
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
#[schema(as = AttendanceDetails)]
pub struct Details {
    #[serde(flatten)]
    pub attendance: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<super::enrollment::Model>,
}

impl From<Model> for Details {
    fn from(attendance: Model) -> Self {
        Self {
            attendance,
            enrollment: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = AttendanceInput)]
pub struct Input {
    pub enrollment_id: Uuid,
    #[schema(example = "2025-09-02")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}
