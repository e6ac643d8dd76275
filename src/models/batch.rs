//! Batch entity model
//!
//! A batch is a cohort training at one venue between two dates.

use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "batches")]
#[schema(as = Batch)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub venue_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
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
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = BatchDetails)]
pub struct Details {
    #[serde(flatten)]
    pub batch: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<super::venue::Model>,
}

impl From<Model> for Details {
    fn from(batch: Model) -> Self {
        Self { batch, venue: None }
    }
}

/// Request body for a batch
///
/// `venue_id` is taken from the path on `POST /venues/{venueId}/batches` and
/// is required on `PUT /batches/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = BatchInput)]
pub struct Input {
    #[serde(default)]
    pub venue_id: Option<Uuid>,
    #[schema(example = "Morning U12")]
    pub name: String,
    #[schema(example = "2025-09-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2025-12-20")]
    pub end_date: NaiveDate,
}
