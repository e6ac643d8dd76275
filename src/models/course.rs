//! Course entity model

use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "courses")]
#[schema(as = Course)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub coach_id: Uuid,
    pub title: String,
    pub description: String,
    /// Link to the course material
    pub content_url: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CoachId",
        to = "super::user::Column::Id"
    )]
    Coach,
    #[sea_orm(has_many = "super::assessment::Entity")]
    Assessments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coach.def()
    }
}

impl Related<super::assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = CourseDetails)]
pub struct Details {
    #[serde(flatten)]
    pub course: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach: Option<super::user::Model>,
}

impl From<Model> for Details {
    fn from(course: Model) -> Self {
        Self {
            course,
            coach: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = CourseInput)]
pub struct Input {
    pub coach_id: Uuid,
    #[schema(example = "Footwork fundamentals")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content_url: String,
}
