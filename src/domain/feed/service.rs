use async_trait::async_trait;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

use crate::domain::feed::{FeedRequest, FeedResponse};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::FeedRepository;

/// A feed url must be an absolute http(s) URL with a host. Anything else,
/// including scheme-relative or bare strings, is rejected before touching
/// the registry.
pub fn is_valid_feed_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

pub struct FeedService {
    feed_repo: Arc<FeedRepository>,
}

impl FeedService {
    pub fn new(feed_repo: Arc<FeedRepository>) -> Self {
        Self { feed_repo }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    /// The catalog is global on purpose: listing returns every feed in the
    /// system so users can discover feeds to follow.
    async fn list_feeds(&self) -> AppResult<Vec<FeedResponse>>;

    async fn create_feed(&self, user_id: Uuid, request: FeedRequest) -> AppResult<FeedResponse>;

    async fn update_feed(
        &self,
        user_id: Uuid,
        feed_id: Uuid,
        request: FeedRequest,
    ) -> AppResult<FeedResponse>;

    async fn delete_feed(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<()>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn list_feeds(&self) -> AppResult<Vec<FeedResponse>> {
        let feeds = self.feed_repo.list_all().await;
        Ok(feeds.into_iter().map(FeedResponse::from).collect())
    }

    async fn create_feed(&self, user_id: Uuid, request: FeedRequest) -> AppResult<FeedResponse> {
        if !is_valid_feed_url(&request.url) {
            return Err(AppError::BadRequest("Invalid URL".to_string()));
        }

        let feed = self
            .feed_repo
            .create(user_id, &request.name, &request.url)
            .await?;

        tracing::info!(feed_id = %feed.id, owner = %user_id, "Feed registered");
        Ok(feed.into())
    }

    /// Check order is fixed by the contract: existence, then ownership,
    /// then url syntax, then uniqueness against other feeds.
    async fn update_feed(
        &self,
        user_id: Uuid,
        feed_id: Uuid,
        request: FeedRequest,
    ) -> AppResult<FeedResponse> {
        let feed = self
            .feed_repo
            .find_by_id(feed_id)
            .await
            .ok_or_else(|| AppError::NotFound("Feed don't exsist".to_string()))?;

        if feed.user_id != user_id {
            return Err(AppError::Forbidden("Forbidden".to_string()));
        }

        if !is_valid_feed_url(&request.url) {
            return Err(AppError::BadRequest("Invalid URL".to_string()));
        }

        let feed = self
            .feed_repo
            .update(feed_id, user_id, &request.name, &request.url)
            .await?;

        Ok(feed.into())
    }

    async fn delete_feed(&self, user_id: Uuid, feed_id: Uuid) -> AppResult<()> {
        self.feed_repo.delete(feed_id, user_id).await?;
        tracing::info!(feed_id = %feed_id, "Feed deleted");
        Ok(())
    }
}
