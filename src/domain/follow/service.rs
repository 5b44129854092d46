use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::follow::Follow;
use crate::error::AppResult;
use crate::infrastructure::repositories::FollowRepository;

pub struct FollowService {
    follow_repo: Arc<FollowRepository>,
}

impl FollowService {
    pub fn new(follow_repo: Arc<FollowRepository>) -> Self {
        Self { follow_repo }
    }
}

#[async_trait]
pub trait FollowServiceApi: Send + Sync {
    /// Follow a feed. Ownership is not required; any user may follow any
    /// existing feed, once.
    async fn follow(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<Follow>;

    /// Unfollow a feed. A missing feed and a feed that exists but is not
    /// followed by the caller are distinct not-found outcomes.
    async fn unfollow(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<()>;

    async fn list_follows(&self, user_id: Uuid) -> AppResult<Vec<Follow>>;
}

#[async_trait]
impl FollowServiceApi for FollowService {
    async fn follow(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<Follow> {
        let follow = self.follow_repo.create(user_id, feed_id).await?;
        tracing::debug!(user_id = %user_id, feed_id = %feed_id, "Feed followed");
        Ok(follow)
    }

    async fn unfollow(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<()> {
        self.follow_repo.delete(user_id, feed_id).await?;
        tracing::debug!(user_id = %user_id, feed_id = %feed_id, "Feed unfollowed");
        Ok(())
    }

    async fn list_follows(&self, user_id: Uuid) -> AppResult<Vec<Follow>> {
        Ok(self.follow_repo.list_for_user(user_id).await)
    }
}
