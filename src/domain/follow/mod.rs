pub mod model;
pub mod service;

pub use model::Follow;
pub use service::{FollowService, FollowServiceApi};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body of `POST /v3/follow`
#[derive(Debug, Serialize, Deserialize)]
pub struct FollowRequest {
    pub feed_id: Uuid,
}
