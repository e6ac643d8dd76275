//! User entity model
//!
//! Users are students, coaches, investors and administrators alike; what a
//! user may do is decided by the roles attached through `user_roles`.

use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "users")]
#[schema(as = User)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string; never leaves the service
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// User together with its eagerly loaded roles
#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(as = UserDetails)]
pub struct Details {
    #[serde(flatten)]
    pub user: Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<super::role::Model>>,
}

impl From<Model> for Details {
    fn from(user: Model) -> Self {
        Self { user, roles: None }
    }
}

/// Request body for creating or replacing a user
///
/// `password` is required on create; on update an omitted password keeps the
/// stored hash. `role_ids` replaces the full role set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = UserInput)]
pub struct Input {
    #[schema(example = "Asha")]
    pub first_name: String,
    #[schema(example = "Rao")]
    pub last_name: String,
    #[schema(example = "asha@example.com")]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role_ids: Vec<Uuid>,
}
