pub mod auth;
pub mod feed;
pub mod follow;
pub mod user;
