use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    domain::user::{CreateUserRequest, UpdateUserRequest, UserResponse, UserService},
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub struct UserController {
    user_service: Arc<UserService>,
}

fn invalid_payload(_: JsonRejection) -> AppError {
    AppError::BadRequest("Invalid request payload".to_string())
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// POST /v1/user - Register a new account (public)
    pub async fn create(
        State(controller): State<Arc<UserController>>,
        payload: Result<Json<CreateUserRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<UserResponse>)> {
        let Json(request) = payload.map_err(invalid_payload)?;
        let user = controller.user_service.register(request).await?;
        Ok((StatusCode::CREATED, Json(user)))
    }

    /// GET /v1/user - Current user's profile
    pub async fn get_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<UserResponse>> {
        let user = controller.user_service.get_profile(auth_user.user_id).await?;
        Ok(Json(user))
    }

    /// PUT /v1/user - Update email and/or name
    pub async fn update_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
        payload: Result<Json<UpdateUserRequest>, JsonRejection>,
    ) -> AppResult<Json<UserResponse>> {
        let Json(request) = payload.map_err(invalid_payload)?;
        let user = controller
            .user_service
            .update_profile(auth_user.user_id, request)
            .await?;
        Ok(Json(user))
    }

    /// DELETE /v1/user - Delete the account, cascading feeds and follows
    pub async fn delete_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<StatusCode> {
        controller
            .user_service
            .delete_account(auth_user.user_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
