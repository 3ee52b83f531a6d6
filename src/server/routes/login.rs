//! Login handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth;

use super::super::{error::ApiError, state::AppState};

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

/// Verify credentials and issue a session token.
///
/// Unknown usernames and wrong passwords produce the same 401 so the
/// response does not leak which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(user) = state.store().find_user_by_username(&request.username)? else {
        return Err(ApiError::invalid_credentials());
    };

    let valid = auth::verify_password(&request.password, &user.password_hash)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    if !valid {
        return Err(ApiError::invalid_credentials());
    }

    let settings = state.auth();
    let token = auth::issue_token(
        &settings.secret,
        settings.token_ttl_secs,
        &user.id,
        &user.username,
    )
    .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
