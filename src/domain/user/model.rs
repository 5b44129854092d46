use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Internal user record. Carries the password hash, so it is never
/// serialized directly; responses go through [`super::UserResponse`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
