pub mod dto;
pub mod model;
pub mod service;

pub use dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
pub use model::User;
pub use service::UserService;
