//! API routes and handlers.

mod blogs;
mod login;
mod stats;
mod users;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Session
        .route("/api/login", post(login::login))
        // User accounts
        .route("/api/users", get(users::list_users))
        .route("/api/users", post(users::create_user))
        // Blog collection
        .route("/api/blogs", get(blogs::list_blogs))
        .route("/api/blogs", post(blogs::create_blog))
        .route("/api/blogs/{id}", put(blogs::update_blog))
        .route("/api/blogs/{id}", delete(blogs::delete_blog))
        // Statistics over the blog collection
        .route("/api/stats/total-likes", get(stats::total_likes))
        .route("/api/stats/favorite", get(stats::favorite_blog))
        .route("/api/stats/most-blogs", get(stats::most_blogs))
        .route("/api/stats/most-likes", get(stats::most_likes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
