//! API error types and JSON response formatting.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::stats::StatsError;
use crate::store::StoreError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details in the response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Blog not found error.
    pub fn blog_not_found(id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "BLOG_NOT_FOUND",
            format!("Blog '{}' not found", id),
        )
        .with_details(serde_json::json!({ "id": id }))
    }

    /// Malformed blog id error.
    pub fn invalid_id(id: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "INVALID_ID",
            format!("'{}' is not a valid blog id", id),
        )
        .with_details(serde_json::json!({ "id": id }))
    }

    /// Missing or invalid bearer token error.
    pub fn token_invalid() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "TOKEN_INVALID",
            "token missing or invalid",
        )
    }

    /// Deletion attempted by a user other than the creator.
    pub fn not_creator() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "NOT_CREATOR",
            "only the creator can delete a blog",
        )
    }

    /// Failed login error. The same response is returned for an unknown
    /// username and a wrong password.
    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "invalid username or password",
        )
    }

    /// Missing title or url on blog creation.
    pub fn title_and_url_required() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "TITLE_AND_URL_REQUIRED",
            "title and url are required",
        )
    }

    /// Invalid user creation input.
    pub fn invalid_user_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_USER_INPUT", message)
    }

    /// Username already taken error.
    pub fn username_taken(username: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "USERNAME_TAKEN",
            format!("expected username '{}' to be unique", username),
        )
        .with_details(serde_json::json!({ "username": username }))
    }

    /// Statistics requested over an empty blog collection.
    pub fn empty_blog_list() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "EMPTY_BLOG_LIST",
            "the blog collection is empty",
        )
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::UsernameTaken(username) => Self::username_taken(username),
            StoreError::UserNotFound(id) => Self::new(
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                format!("User '{}' not found", id),
            ),
            StoreError::NotInitialized(path) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_NOT_INITIALIZED",
                format!("Store at '{}' is not initialized", path),
            ),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::EmptyList => Self::empty_blog_list(),
        }
    }
}
