use std::sync::Arc;

use super::{password::verify_password, JwtManager, TokenResponse};
use crate::domain::user::service::is_valid_email;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::UserRepository;

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    jwt_secret: String,
    jwt_expiration_hours: i64,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, jwt_secret: String, jwt_expiration_hours: i64) -> Self {
        Self {
            user_repo,
            jwt_secret,
            jwt_expiration_hours,
        }
    }

    /// Authenticate with email + password and issue a bearer token.
    ///
    /// Outcome order is part of the contract: malformed identifier (which
    /// includes anything that is not an email at all), then unknown user,
    /// then wrong password. The three stay distinct.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        if !is_valid_email(username) {
            return Err(AppError::BadRequest("Invalid email".to_string()));
        }

        let user = self
            .user_repo
            .find_by_email(username)
            .await
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::Unauthorized("Wrong password".to_string()));
        }

        let jwt_manager = JwtManager::new(self.jwt_secret.clone(), self.jwt_expiration_hours);
        let token = jwt_manager.generate_token(user.id)?;

        tracing::debug!(user_id = %user.id, "Login succeeded");
        Ok(TokenResponse {
            token,
            token_type: "Bearer".to_string(),
        })
    }
}
