use std::collections::HashMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::{feed::Feed, follow::Follow, user::User};

/// All record families live behind one lock so that a check-then-write or a
/// cross-entity cascade is a single critical section. Readers can never
/// observe a feed without an owner or a follow edge without its feed.
#[derive(Debug, Default)]
pub struct Store {
    pub users: HashMap<Uuid, User>,
    pub feeds: HashMap<Uuid, Feed>,
    pub follows: Vec<Follow>,
}

impl Store {
    pub fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != exclude)
    }

    pub fn url_taken(&self, url: &str, exclude: Option<Uuid>) -> bool {
        self.feeds
            .values()
            .any(|f| f.url == url && Some(f.id) != exclude)
    }

    pub fn is_following(&self, user_id: Uuid, feed_id: Uuid) -> bool {
        self.follows
            .iter()
            .any(|f| f.user_id == user_id && f.feed_id == feed_id)
    }

    /// Remove a feed together with every follow edge pointing at it.
    pub fn remove_feed_cascade(&mut self, feed_id: Uuid) -> Option<Feed> {
        let feed = self.feeds.remove(&feed_id)?;
        self.follows.retain(|f| f.feed_id != feed_id);
        Some(feed)
    }

    /// Remove a user, the feeds they own, and every follow edge referencing
    /// either the user or one of those feeds.
    pub fn remove_user_cascade(&mut self, user_id: Uuid) -> Option<User> {
        let user = self.users.remove(&user_id)?;
        let owned: Vec<Uuid> = self
            .feeds
            .values()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.id)
            .collect();
        for feed_id in owned {
            self.remove_feed_cascade(feed_id);
        }
        self.follows.retain(|f| f.user_id != user_id);
        Some(user)
    }
}

/// Shared application store handle. Repositories take the lock once per
/// operation, so racing writes on the same uniqueness constraint resolve
/// with exactly one winner.
#[derive(Debug, Default)]
pub struct Database {
    inner: RwLock<Store>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().await
    }
}
