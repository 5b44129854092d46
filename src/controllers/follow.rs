use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::follow::{Follow, FollowRequest, FollowService, FollowServiceApi},
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub struct FollowController {
    follow_service: Arc<FollowService>,
}

impl FollowController {
    pub fn new(follow_service: Arc<FollowService>) -> Self {
        Self { follow_service }
    }

    /// POST /v3/follow - Follow a feed by id
    pub async fn follow(
        State(controller): State<Arc<FollowController>>,
        Extension(auth_user): Extension<AuthUser>,
        payload: Result<Json<FollowRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<Follow>)> {
        let Json(request) =
            payload.map_err(|_| AppError::BadRequest("Invalid request payload".to_string()))?;
        let follow = controller
            .follow_service
            .follow(auth_user.user_id, request.feed_id)
            .await?;
        Ok((StatusCode::CREATED, Json(follow)))
    }

    /// GET /v3/follow - The caller's follow edges
    pub async fn list(
        State(controller): State<Arc<FollowController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<Vec<Follow>>> {
        let follows = controller
            .follow_service
            .list_follows(auth_user.user_id)
            .await?;
        Ok(Json(follows))
    }

    /// DELETE /v3/follow/{feed_id} - Unfollow a feed
    pub async fn unfollow(
        State(controller): State<Arc<FollowController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(feed_id): Path<String>,
    ) -> AppResult<StatusCode> {
        let feed_id = Uuid::parse_str(&feed_id)
            .map_err(|_| AppError::BadRequest("Invalid feed id".to_string()))?;
        controller
            .follow_service
            .unfollow(auth_user.user_id, feed_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
