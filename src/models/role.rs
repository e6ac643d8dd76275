//! Role entity model
//!
//! Roles are the named capabilities a user can hold. The set of names the
//! authorization gate understands lives in [`crate::auth::RoleName`]; rows with
//! other names are stored but grant nothing.

use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "roles")]
#[schema(as = Role)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Unique role name (e.g. `admin`)
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for creating or replacing a role
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = RoleInput)]
pub struct Input {
    #[schema(example = "coach")]
    pub name: String,
}
