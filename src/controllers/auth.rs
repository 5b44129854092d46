use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use std::sync::Arc;

use crate::{
    domain::auth::{AuthService, LoginRequest, TokenResponse},
    error::{AppError, AppResult},
};

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// POST /v1/login - Exchange form credentials for a bearer token
    pub async fn login(
        State(controller): State<Arc<AuthController>>,
        form: Result<Form<LoginRequest>, FormRejection>,
    ) -> AppResult<Json<TokenResponse>> {
        let Form(request) =
            form.map_err(|_| AppError::BadRequest("Invalid request payload".to_string()))?;

        let response = controller
            .auth_service
            .login(&request.username, &request.password)
            .await?;
        Ok(Json(response))
    }
}
