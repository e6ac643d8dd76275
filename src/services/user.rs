//! User service: input validation, password hashing and login checks.

use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};
use std::sync::{Arc, OnceLock};
use tracing::debug;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::user;
use crate::repositories::{UserInclude, UserRepository};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(db: Arc<sea_orm::DatabaseConnection>) -> Self {
        Self {
            repo: UserRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<user::Details>, RepositoryError> {
        self.repo.find_all(&[UserInclude::Roles]).await
    }

    pub async fn get(&self, id: Uuid) -> Result<user::Details, RepositoryError> {
        self.repo.find_by_id(id, &[UserInclude::Roles]).await
    }

    pub async fn create(&self, mut input: user::Input) -> Result<user::Details, RepositoryError> {
        normalize(&mut input);
        validate(&input)?;

        let password = input
            .password
            .as_deref()
            .ok_or_else(|| RepositoryError::validation("password", "is required"))?;
        let hash = hash_blocking(password.to_string()).await?;

        self.repo.create(&input, hash).await
    }

    /// Replaces the user record.
    ///
    /// An omitted password, or one matching the stored hash, keeps the hash
    /// as is.
    pub async fn update(
        &self,
        id: Uuid,
        mut input: user::Input,
    ) -> Result<user::Details, RepositoryError> {
        normalize(&mut input);
        validate(&input)?;

        let hash = match input.password.clone() {
            Some(password) => {
                let existing = self.repo.find_model(id).await?;
                if verify_blocking(existing.password_hash, password.clone()).await? {
                    None
                } else {
                    Some(hash_blocking(password).await?)
                }
            }
            None => None,
        };
        self.repo.update(id, &input, hash).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }

    /// Checks an email/password pair, returning the user with roles on success.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<user::Details>, RepositoryError> {
        let email = email.trim().to_lowercase();
        let Some(user) = self.repo.find_by_email(&email).await? else {
            debug!("Login attempt for unknown email");
            // Same Argon2 cost as a real check.
            let candidate = password.to_string();
            run_blocking(move || match decoy_hash() {
                Some(decoy) => verify_password(decoy, &candidate),
                None => Ok(false),
            })
            .await?;
            return Ok(None);
        };

        if !verify_blocking(user.password_hash.clone(), password.to_string()).await? {
            debug!(user_id = %user.id, "Login attempt with wrong password");
            return Ok(None);
        }

        self.repo
            .find_by_id(user.id, &[UserInclude::Roles])
            .await
            .map(Some)
    }
}

fn normalize(input: &mut user::Input) {
    input.email = input.email.trim().to_lowercase();
    input.first_name = input.first_name.trim().to_string();
    input.last_name = input.last_name.trim().to_string();
}

fn validate(input: &user::Input) -> Result<(), RepositoryError> {
    validation::non_empty("first_name", &input.first_name)?;
    validation::non_empty("last_name", &input.last_name)?;
    validation::email("email", &input.email)?;
    if let Some(password) = &input.password
        && password.chars().count() < MIN_PASSWORD_LEN
    {
        return Err(RepositoryError::validation(
            "password",
            format!("must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

/// Hash compared against when the login email is unknown.
fn decoy_hash() -> Option<&'static str> {
    static DECOY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DECOY_HASH
        .get_or_init(|| hash_password("decoy-password").ok())
        .as_deref()
}

/// Runs password work on the blocking pool, off the async workers.
async fn run_blocking<T, F>(work: F) -> Result<T, RepositoryError>
where
    F: FnOnce() -> Result<T, RepositoryError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| RepositoryError::Internal(format!("password task failed: {e}")))?
}

async fn hash_blocking(password: String) -> Result<String, RepositoryError> {
    run_blocking(move || hash_password(&password)).await
}

async fn verify_blocking(stored_hash: String, candidate: String) -> Result<bool, RepositoryError> {
    run_blocking(move || verify_password(&stored_hash, &candidate)).await
}

/// Produces an Argon2id PHC string for storage.
pub fn hash_password(password: &str) -> Result<String, RepositoryError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| RepositoryError::Internal(format!("failed to hash password: {e}")))
}

pub fn verify_password(stored_hash: &str, candidate: &str) -> Result<bool, RepositoryError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| RepositoryError::Internal(format!("invalid stored password hash: {e}")))?;
    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(RepositoryError::Internal(format!(
            "failed to verify password: {e}"
        ))),
    }
}
