use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::feed::Feed;
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::Database;

pub struct FeedRepository {
    db: Arc<Database>,
}

impl FeedRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Every feed in the system, newest first
    pub async fn list_all(&self) -> Vec<Feed> {
        let store = self.db.read().await;
        let mut feeds: Vec<Feed> = store.feeds.values().cloned().collect();
        feeds.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        feeds
    }

    pub async fn find_by_id(&self, feed_id: Uuid) -> Option<Feed> {
        self.db.read().await.feeds.get(&feed_id).cloned()
    }

    /// Register a feed. Url uniqueness is global and checked atomically
    /// with the insert.
    pub async fn create(&self, user_id: Uuid, name: &str, url: &str) -> AppResult<Feed> {
        let mut store = self.db.write().await;

        if store.url_taken(url, None) {
            return Err(AppError::Conflict("Feed exist".to_string()));
        }

        let feed = Feed {
            id: Uuid::new_v4(),
            name: name.to_string(),
            url: url.to_string(),
            user_id,
            created_at: Utc::now(),
        };
        store.feeds.insert(feed.id, feed.clone());

        Ok(feed)
    }

    /// Replace name and url. Existence and ownership are re-verified under
    /// the write guard so the mutation cannot race a delete, and the url
    /// must not collide with any other feed.
    pub async fn update(
        &self,
        feed_id: Uuid,
        caller_id: Uuid,
        name: &str,
        url: &str,
    ) -> AppResult<Feed> {
        let mut store = self.db.write().await;

        let owner_id = store
            .feeds
            .get(&feed_id)
            .map(|f| f.user_id)
            .ok_or_else(|| AppError::NotFound("Feed don't exsist".to_string()))?;
        if owner_id != caller_id {
            return Err(AppError::Forbidden("Forbidden".to_string()));
        }
        if store.url_taken(url, Some(feed_id)) {
            return Err(AppError::Conflict("Duplicate feed exist".to_string()));
        }

        let feed = store
            .feeds
            .get_mut(&feed_id)
            .ok_or_else(|| AppError::NotFound("Feed don't exsist".to_string()))?;
        feed.name = name.to_string();
        feed.url = url.to_string();

        Ok(feed.clone())
    }

    /// Delete a feed and its follow edges in one critical section.
    /// Existence before ownership, as the contract orders the failures.
    pub async fn delete(&self, feed_id: Uuid, caller_id: Uuid) -> AppResult<()> {
        let mut store = self.db.write().await;

        let owner_id = store
            .feeds
            .get(&feed_id)
            .map(|f| f.user_id)
            .ok_or_else(|| AppError::NotFound("Feed don't exsist".to_string()))?;
        if owner_id != caller_id {
            return Err(AppError::Forbidden("Forbidden".to_string()));
        }

        store.remove_feed_cascade(feed_id);
        Ok(())
    }
}
