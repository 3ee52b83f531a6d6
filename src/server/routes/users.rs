//! User account handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::store::{NewUser, User};

use super::super::{error::ApiError, state::AppState};

/// Minimum length for usernames and passwords.
const MIN_CREDENTIAL_LEN: usize = 3;

/// User record as exposed by the API. The password hash never leaves the
/// store layer.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs: user.blogs,
        }
    }
}

/// List all user accounts.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.store().list_users()?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Create a user account.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let (Some(username), Some(password)) = (request.username, request.password) else {
        return Err(ApiError::invalid_user_input(
            "username and password are required",
        ));
    };

    if username.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(ApiError::invalid_user_input(format!(
            "username must be at least {} characters long",
            MIN_CREDENTIAL_LEN
        )));
    }
    if password.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(ApiError::invalid_user_input(format!(
            "password must be at least {} characters long",
            MIN_CREDENTIAL_LEN
        )));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ApiError::internal(e.to_string()))?;

    let mut new = NewUser::new(username, password_hash);
    new.name = request.name;

    let user = state.store().add_user(new)?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
