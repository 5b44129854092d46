use regex::Regex;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

use crate::domain::auth::password::hash_password;
use crate::domain::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::UserRepository;

/// HTML5-style email format check. Registration, profile update and the
/// login identifier all go through this; malformed addresses are rejected
/// before any store access.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$",
        )
        .expect("email regex must compile")
    });
    re.is_match(email)
}

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new account. Email format first, then uniqueness (checked
    /// atomically with the insert by the repository).
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        if !is_valid_email(&request.email) {
            return Err(AppError::BadRequest("Invalid email".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .user_repo
            .create(&request.name, &request.email, password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user.into())
    }

    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<UserResponse> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User don't exsist".to_string()))
    }

    /// Update email and/or name. A new email must be well-formed and must
    /// not belong to a different user.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        if let Some(email) = request.email.as_deref() {
            if !is_valid_email(email) {
                return Err(AppError::BadRequest("Invalid email".to_string()));
            }
        }

        let user = self
            .user_repo
            .update(user_id, request.name.as_deref(), request.email.as_deref())
            .await?;

        Ok(user.into())
    }

    /// Delete the account and cascade feeds and follow edges. Not
    /// idempotent: a second delete reports the user as absent.
    pub async fn delete_account(&self, user_id: Uuid) -> AppResult<()> {
        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
