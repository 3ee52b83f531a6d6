//! Statistics handlers.
//!
//! Each handler feeds the current blog collection through one of the pure
//! statistics functions and serializes the result. The favorite-blog
//! endpoint is the only one that can fail: an empty collection maps to 404.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::blog::Blog;
use crate::stats::{AuthorBlogCount, AuthorLikes};

use super::super::{error::ApiError, state::AppState};

/// Total likes across the collection.
#[derive(Debug, Serialize)]
pub struct TotalLikesResponse {
    pub likes: u64,
}

/// Sum the likes of every blog.
pub async fn total_likes(State(state): State<AppState>) -> Result<Json<TotalLikesResponse>, ApiError> {
    let blogs = state.store().list_blogs()?;
    Ok(Json(TotalLikesResponse {
        likes: crate::stats::total_likes(&blogs),
    }))
}

/// The single most-liked blog.
pub async fn favorite_blog(State(state): State<AppState>) -> Result<Json<Blog>, ApiError> {
    let blogs = state.store().list_blogs()?;
    let favorite = crate::stats::favorite_blog(&blogs)?;
    Ok(Json(favorite.clone()))
}

/// The author with the most blog entries.
pub async fn most_blogs(State(state): State<AppState>) -> Result<Json<AuthorBlogCount>, ApiError> {
    let blogs = state.store().list_blogs()?;
    Ok(Json(crate::stats::most_blogs(&blogs)))
}

/// The author with the most accumulated likes.
pub async fn most_likes(State(state): State<AppState>) -> Result<Json<AuthorLikes>, ApiError> {
    let blogs = state.store().list_blogs()?;
    Ok(Json(crate::stats::most_likes(&blogs)))
}
