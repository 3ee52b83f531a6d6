//! Blog collection handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blog::Blog;
use crate::store::{BlogUpdate, NewBlog};

use super::super::{error::ApiError, extract::AuthUser, state::AppState};

/// Owner summary embedded in blog responses.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

/// Blog record with its owner resolved.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user: Option<UserSummary>,
}

fn resolve_owner(state: &AppState, blog: Blog) -> Result<BlogResponse, ApiError> {
    let user = match &blog.user {
        Some(user_id) => state.store().get_user(user_id)?.map(|user| UserSummary {
            id: user.id,
            username: user.username,
            name: user.name,
        }),
        None => None,
    };

    Ok(BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user,
    })
}

/// List all blogs with their owners.
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, ApiError> {
    let blogs = state.store().list_blogs()?;

    let mut responses = Vec::with_capacity(blogs.len());
    for blog in blogs {
        responses.push(resolve_owner(&state, blog)?);
    }

    Ok(Json(responses))
}

/// Request body for creating a blog. Fields are optional so that missing
/// title/url map to a domain validation error rather than a decode failure.
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
}

/// Create a blog owned by the authenticated user.
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    let Some(title) = request.title.filter(|title| !title.is_empty()) else {
        return Err(ApiError::title_and_url_required());
    };
    let Some(url) = request.url.filter(|url| !url.is_empty()) else {
        return Err(ApiError::title_and_url_required());
    };

    let mut new = NewBlog::new(title, url)
        .with_likes(request.likes.unwrap_or(0))
        .with_user(user.id);
    new.author = request.author;

    let blog = state.store().add_blog(new)?;

    Ok((StatusCode::CREATED, Json(resolve_owner(&state, blog)?)))
}

/// Apply a partial update to a blog.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<BlogUpdate>,
) -> Result<Json<BlogResponse>, ApiError> {
    let blog = state
        .store()
        .update_blog(&id, update)?
        .ok_or_else(|| ApiError::blog_not_found(&id))?;

    Ok(Json(resolve_owner(&state, blog)?))
}

/// Delete a blog. Only the creator may delete it.
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AuthUser(user): AuthUser,
) -> Result<StatusCode, ApiError> {
    if Uuid::parse_str(&id).is_err() {
        return Err(ApiError::invalid_id(&id));
    }

    let Some(blog) = state.store().get_blog(&id)? else {
        return Err(ApiError::blog_not_found(&id));
    };

    if blog.user.as_deref() != Some(user.id.as_str()) {
        return Err(ApiError::not_creator());
    }

    state.store().delete_blog(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
