use axum::{
    handler::Handler,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infrastructure::config::Config;
use crate::{
    controllers::{
        auth::AuthController, feed::FeedController, follow::FollowController, health,
        user::UserController,
    },
    infrastructure::auth::{auth_middleware, request_id_middleware},
};

use crate::infrastructure::repositories::UserRepository;

/// Assemble the full application router.
///
/// `/v1/user` mixes a public POST (registration) with protected
/// GET/PUT/DELETE on the same path, so the auth middleware is attached
/// per-handler there and per-subtree everywhere else.
pub fn build_router(
    config: Arc<Config>,
    user_repo: Arc<UserRepository>,
    auth_controller: Arc<AuthController>,
    user_controller: Arc<UserController>,
    feed_controller: Arc<FeedController>,
    follow_controller: Arc<FollowController>,
) -> Router {
    let auth_layer = middleware::from_fn_with_state((user_repo, config), auth_middleware);

    let login_routes = Router::new()
        .route("/v1/login", post(AuthController::login))
        .with_state(auth_controller);

    let user_routes = Router::new()
        .route(
            "/v1/user",
            post(UserController::create)
                .get(UserController::get_me.layer(auth_layer.clone()))
                .put(UserController::update_me.layer(auth_layer.clone()))
                .delete(UserController::delete_me.layer(auth_layer.clone())),
        )
        .with_state(user_controller);

    let feed_routes = Router::new()
        .route(
            "/v2/feeds",
            get(FeedController::list).post(FeedController::create),
        )
        .route(
            "/v2/feeds/:feed_id",
            put(FeedController::update).delete(FeedController::delete),
        )
        .with_state(feed_controller)
        .layer(auth_layer.clone());

    let follow_routes = Router::new()
        .route(
            "/v3/follow",
            post(FollowController::follow).get(FollowController::list),
        )
        .route("/v3/follow/:feed_id", delete(FollowController::unfollow))
        .with_state(follow_controller)
        .layer(auth_layer);

    Router::new()
        .route("/ready", get(health::ready))
        .merge(login_routes)
        .merge(user_routes)
        .merge(feed_routes)
        .merge(follow_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Bind and serve until shutdown
pub async fn start_http_server(config: Arc<Config>, app: Router) -> anyhow::Result<()> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
