use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::feed::{FeedRequest, FeedResponse, FeedService, FeedServiceApi},
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub struct FeedController {
    feed_service: Arc<FeedService>,
}

fn invalid_payload(_: JsonRejection) -> AppError {
    AppError::BadRequest("Invalid request payload".to_string())
}

fn parse_feed_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid feed id".to_string()))
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /v2/feeds - Global feed catalog
    pub async fn list(
        State(controller): State<Arc<FeedController>>,
        Extension(_auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<Vec<FeedResponse>>> {
        let feeds = controller.feed_service.list_feeds().await?;
        Ok(Json(feeds))
    }

    /// POST /v2/feeds - Register a new feed, caller becomes owner
    pub async fn create(
        State(controller): State<Arc<FeedController>>,
        Extension(auth_user): Extension<AuthUser>,
        payload: Result<Json<FeedRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<FeedResponse>)> {
        let Json(request) = payload.map_err(invalid_payload)?;
        let feed = controller
            .feed_service
            .create_feed(auth_user.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(feed)))
    }

    /// PUT /v2/feeds/{feed_id} - Replace name and url (owner only)
    pub async fn update(
        State(controller): State<Arc<FeedController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(feed_id): Path<String>,
        payload: Result<Json<FeedRequest>, JsonRejection>,
    ) -> AppResult<Json<FeedResponse>> {
        let Json(request) = payload.map_err(invalid_payload)?;
        let feed_id = parse_feed_id(&feed_id)?;
        let feed = controller
            .feed_service
            .update_feed(auth_user.user_id, feed_id, request)
            .await?;
        Ok(Json(feed))
    }

    /// DELETE /v2/feeds/{feed_id} - Delete a feed (owner only)
    pub async fn delete(
        State(controller): State<Arc<FeedController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(feed_id): Path<String>,
    ) -> AppResult<StatusCode> {
        let feed_id = parse_feed_id(&feed_id)?;
        controller
            .feed_service
            .delete_feed(auth_user.user_id, feed_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
