pub mod model;
pub mod service;

pub use model::Feed;
pub use service::{is_valid_feed_url, FeedService, FeedServiceApi};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for feed endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub url: String,
}

/// Request body for creating or updating a feed
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedRequest {
    pub name: String,
    pub url: String,
}

impl From<Feed> for FeedResponse {
    fn from(feed: Feed) -> Self {
        Self {
            id: feed.id,
            name: feed.name,
            user_id: feed.user_id,
            url: feed.url,
        }
    }
}
