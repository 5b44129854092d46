use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A follow edge: the user subscribes to the feed's updates. Unique per
/// (user, feed) pair with no identity of its own, and independent of feed
/// ownership. Serialized as-is in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    pub user_id: Uuid,
    pub feed_id: Uuid,
}
