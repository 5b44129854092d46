use serde::{Deserialize, Serialize};

/// Form body of `POST /v1/login`. Missing fields decode as empty strings
/// and fail the email format check like any other malformed identifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Bearer credential returned by a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
}
