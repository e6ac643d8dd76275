//! Assessment entity model: a student's scored attempt at a course.

use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "assessments")]
#[schema(as = Assessment)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub student_id: Uuid,
    /// Score in `0..=100`
    pub score: f64,
    pub attempted_at: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = AssessmentDetails)]
pub struct Details {
    #[serde(flatten)]
    pub assessment: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<super::course::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<super::user::Model>,
}

impl From<Model> for Details {
    fn from(assessment: Model) -> Self {
        Self {
            assessment,
            course: None,
            student: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = AssessmentInput)]
pub struct Input {
    pub course_id: Uuid,
    pub student_id: Uuid,
    #[schema(example = 82.5)]
    pub score: f64,
    #[schema(example = "2025-10-01T09:30:00+05:30")]
    pub attempted_at: DateTime<FixedOffset>,
}
