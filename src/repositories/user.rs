//! User repository for database operations
//!
//! Users own their role set: create and update replace the `user_roles` rows
//! inside the same transaction as the user row itself.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::role::Entity as Role;
use crate::models::user::{self, Entity as User};
use crate::models::user_role::{self, Entity as UserRole};

/// Relations that can be eagerly loaded alongside users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInclude {
    Roles,
}

/// Repository for user database operations
#[derive(Debug, Clone)]
pub struct UserRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Returns every user with the requested relations loaded
    pub async fn find_all(
        &self,
        include: &[UserInclude],
    ) -> Result<Vec<user::Details>, RepositoryError> {
        let users = User::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await?;
        self.hydrate(users, include).await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[UserInclude],
    ) -> Result<user::Details, RepositoryError> {
        let user = self.find_model(id).await?;
        let mut details = self.hydrate(vec![user], include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("user", id))
    }

    /// Finds a user by exact email, without relations
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, RepositoryError> {
        Ok(User::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await?)
    }

    /// Inserts a user and its role set in one transaction
    pub async fn create(
        &self,
        input: &user::Input,
        password_hash: String,
    ) -> Result<user::Details, RepositoryError> {
        let now = timestamp_now();
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(input.first_name.clone()),
            last_name: Set(input.last_name.clone()),
            email: Set(input.email.clone()),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.db.begin().await?;
        let user = model.insert(&txn).await?;
        replace_roles(&txn, user.id, &input.role_ids).await?;
        txn.commit().await?;

        self.find_by_id(user.id, &[UserInclude::Roles]).await
    }

    /// Overwrites the user's fields and role set.
    ///
    /// `password_hash` of `None` keeps the stored hash.
    pub async fn update(
        &self,
        id: Uuid,
        input: &user::Input,
        password_hash: Option<String>,
    ) -> Result<user::Details, RepositoryError> {
        let existing = self.find_model(id).await?;
        let mut model: user::ActiveModel = existing.into();
        model.first_name.set_if_not_equals(input.first_name.clone());
        model.last_name.set_if_not_equals(input.last_name.clone());
        model.email.set_if_not_equals(input.email.clone());
        if let Some(hash) = password_hash {
            model.password_hash.set_if_not_equals(hash);
        }

        let txn = self.db.begin().await?;
        if model.is_changed() {
            model.updated_at = Set(timestamp_now());
            model.update(&txn).await?;
        }
        replace_roles(&txn, id, &input.role_ids).await?;
        txn.commit().await?;

        self.find_by_id(id, &[UserInclude::Roles]).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = User::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("user", id));
        }
        Ok(())
    }

    /// Grants a single role, leaving the rest of the set untouched
    pub async fn add_role(&self, user_id: Uuid, role_id: Uuid) -> Result<(), RepositoryError> {
        let exists = UserRole::find_by_id((user_id, role_id))
            .one(&*self.db)
            .await?
            .is_some();
        if !exists {
            user_role::ActiveModel {
                user_id: Set(user_id),
                role_id: Set(role_id),
            }
            .insert(&*self.db)
            .await?;
        }
        Ok(())
    }

    /// Finds a user row, without relations
    pub async fn find_model(&self, id: Uuid) -> Result<user::Model, RepositoryError> {
        User::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("user", id))
    }

    async fn hydrate(
        &self,
        users: Vec<user::Model>,
        include: &[UserInclude],
    ) -> Result<Vec<user::Details>, RepositoryError> {
        let mut details: Vec<user::Details> = users.iter().cloned().map(Into::into).collect();

        if include.contains(&UserInclude::Roles) {
            let roles = users.load_many_to_many(Role, UserRole, &*self.db).await?;
            for (detail, roles) in details.iter_mut().zip(roles) {
                detail.roles = Some(roles);
            }
        }

        Ok(details)
    }
}

async fn replace_roles<C>(db: &C, user_id: Uuid, role_ids: &[Uuid]) -> Result<(), RepositoryError>
where
    C: ConnectionTrait,
{
    UserRole::delete_many()
        .filter(user_role::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    let mut unique = role_ids.to_vec();
    unique.sort();
    unique.dedup();
    if unique.is_empty() {
        return Ok(());
    }

    let rows = unique.into_iter().map(|role_id| user_role::ActiveModel {
        user_id: Set(user_id),
        role_id: Set(role_id),
    });
    UserRole::insert_many(rows).exec_without_returning(db).await?;

    Ok(())
}
