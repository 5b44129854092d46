use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered feed. `url` is unique across all feeds, not per owner;
/// `user_id` is the owner and the only identity allowed to mutate it.
#[derive(Debug, Clone)]
pub struct Feed {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
