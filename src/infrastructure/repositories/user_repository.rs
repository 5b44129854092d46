use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::user::User;
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::Database;

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new user. The email uniqueness check and the insert happen
    /// under one write guard, so two racing registrations of the same email
    /// resolve with exactly one winner.
    pub async fn create(&self, name: &str, email: &str, password_hash: String) -> AppResult<User> {
        let mut store = self.db.write().await;

        if store.email_taken(email, None) {
            return Err(AppError::Conflict("Account already exists".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        };
        store.users.insert(user.id, user.clone());

        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Option<User> {
        self.db.read().await.users.get(&user_id).cloned()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.db
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Apply a partial profile update. The collision check against other
    /// users and the mutation are one critical section.
    pub async fn update(
        &self,
        user_id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<User> {
        let mut store = self.db.write().await;

        if !store.users.contains_key(&user_id) {
            return Err(AppError::NotFound("User don't exsist".to_string()));
        }
        if let Some(email) = email {
            if store.email_taken(email, Some(user_id)) {
                return Err(AppError::Conflict("Account already exists".to_string()));
            }
        }

        let user = store
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound("User don't exsist".to_string()))?;
        if let Some(name) = name {
            user.name = name.to_string();
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    /// Remove the user and cascade owned feeds and all follow edges
    /// referencing the user, atomically with respect to readers.
    pub async fn delete(&self, user_id: Uuid) -> AppResult<()> {
        let mut store = self.db.write().await;

        store
            .remove_user_cascade(user_id)
            .ok_or_else(|| AppError::NotFound("User don't exsist".to_string()))?;

        Ok(())
    }
}
