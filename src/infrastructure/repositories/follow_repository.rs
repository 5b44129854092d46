use std::sync::Arc;
use uuid::Uuid;

use crate::domain::follow::Follow;
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::Database;

pub struct FollowRepository {
    db: Arc<Database>,
}

impl FollowRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create a follow edge. Feed existence is checked before the duplicate
    /// edge, both under the same write guard as the insert.
    pub async fn create(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<Follow> {
        let mut store = self.db.write().await;

        if !store.feeds.contains_key(&feed_id) {
            return Err(AppError::NotFound("Feed not found".to_string()));
        }
        if store.is_following(user_id, feed_id) {
            return Err(AppError::Conflict("Feed already followed".to_string()));
        }

        let follow = Follow { user_id, feed_id };
        store.follows.push(follow.clone());

        Ok(follow)
    }

    /// Remove a follow edge. A missing feed and a missing edge are two
    /// different not-found answers.
    pub async fn delete(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<()> {
        let mut store = self.db.write().await;

        if !store.feeds.contains_key(&feed_id) {
            return Err(AppError::NotFound("Feed not found".to_string()));
        }
        if !store.is_following(user_id, feed_id) {
            return Err(AppError::NotFound("Feed not followed".to_string()));
        }

        store
            .follows
            .retain(|f| !(f.user_id == user_id && f.feed_id == feed_id));
        Ok(())
    }

    /// The caller's own edges only
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Follow> {
        self.db
            .read()
            .await
            .follows
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect()
    }
}
