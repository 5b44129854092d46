use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

use feedhub_backend::controllers::{
    auth::AuthController, feed::FeedController, follow::FollowController, user::UserController,
};
use feedhub_backend::domain::{
    auth::AuthService, feed::FeedService, follow::FollowService, user::UserService,
};
use feedhub_backend::infrastructure::config::{Config, Environment, LogFormat};
use feedhub_backend::infrastructure::db::Database;
use feedhub_backend::infrastructure::http::build_router;
use feedhub_backend::infrastructure::repositories::{
    FeedRepository, FollowRepository, UserRepository,
};


use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
}

impl TestContext {
    /// Spawn a fresh application instance on an ephemeral port
    pub async fn new() -> Result<Self> {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            jwt_secret: "test-jwt-secret-key-for-testing-only".to_string(),
            jwt_expiration_hours: 1,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
        };

        let config_arc = Arc::new(config);
        let db = Arc::new(Database::new());

        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let feed_repo = Arc::new(FeedRepository::new(db.clone()));
        let follow_repo = Arc::new(FollowRepository::new(db.clone()));

        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            config_arc.jwt_secret.clone(),
            config_arc.jwt_expiration_hours,
        ));
        let user_service = Arc::new(UserService::new(user_repo.clone()));
        let feed_service = Arc::new(FeedService::new(feed_repo.clone()));
        let follow_service = Arc::new(FollowService::new(follow_repo.clone()));

        let app = build_router(
            config_arc,
            user_repo,
            Arc::new(AuthController::new(auth_service)),
            Arc::new(UserController::new(user_service)),
            Arc::new(FeedController::new(feed_service)),
            Arc::new(FollowController::new(follow_service)),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
        })
    }
}
