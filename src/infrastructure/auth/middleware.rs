use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::infrastructure::config::Config;
use crate::{
    domain::auth::JwtManager, error::AppError, infrastructure::repositories::UserRepository,
};

/// User context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

fn unauthorized() -> AppError {
    AppError::Unauthorized("Unauthorized".to_string())
}

/// Bearer-token authentication middleware.
///
/// Every failure (missing header, malformed scheme, bad signature, expired
/// token, unknown subject) yields the same 401 body. Deleting a user
/// invalidates their outstanding tokens on the next request.
pub async fn auth_middleware(
    State((user_repo, config)): State<(Arc<UserRepository>, Arc<Config>)>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(unauthorized)?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone(), config.jwt_expiration_hours);
    let claims = jwt_manager.validate_token(token).map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        unauthorized()
    })?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| unauthorized())?;

    // A token for a deleted user is as invalid as a forged one.
    let user = user_repo.find_by_id(user_id).await.ok_or_else(unauthorized)?;

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}
