pub mod feed_repository;
pub mod follow_repository;
pub mod user_repository;

pub use feed_repository::FeedRepository;
pub use follow_repository::FollowRepository;
pub use user_repository::UserRepository;
