use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedhub_backend::controllers::{
    auth::AuthController, feed::FeedController, follow::FollowController, user::UserController,
};
use feedhub_backend::domain::{
    auth::AuthService, feed::FeedService, follow::FollowService, user::UserService,
};
use feedhub_backend::infrastructure::config::{Config, LogFormat};
use feedhub_backend::infrastructure::db::Database;
use feedhub_backend::infrastructure::http::{build_router, start_http_server};
use feedhub_backend::infrastructure::repositories::{
    FeedRepository, FollowRepository, UserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting FeedHub Backend on {}:{}", config.host, config.port);

    let config = Arc::new(config);
    let db = Arc::new(Database::new());

    // 1. Instantiate repositories (inject shared store)
    let user_repo = Arc::new(UserRepository::new(db.clone()));
    let feed_repo = Arc::new(FeedRepository::new(db.clone()));
    let follow_repo = Arc::new(FollowRepository::new(db.clone()));

    // 2. Instantiate services (inject repositories)
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        config.jwt_secret.clone(),
        config.jwt_expiration_hours,
    ));
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let feed_service = Arc::new(FeedService::new(feed_repo.clone()));
    let follow_service = Arc::new(FollowService::new(follow_repo.clone()));

    // 3. Instantiate controllers (inject services)
    let auth_controller = Arc::new(AuthController::new(auth_service));
    let user_controller = Arc::new(UserController::new(user_service));
    let feed_controller = Arc::new(FeedController::new(feed_service));
    let follow_controller = Arc::new(FollowController::new(follow_service));

    // Start HTTP server with all routes
    let app = build_router(
        config.clone(),
        user_repo,
        auth_controller,
        user_controller,
        feed_controller,
        follow_controller,
    );
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "feedhub_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "feedhub_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
