//! HTTP API server for bloglist.
//!
//! This module provides an HTTP JSON API on top of the bloglist library
//! using axum. It exposes the blog and user collections, a login endpoint
//! issuing bearer tokens, and read-only statistics over the blog collection.

mod config;
mod error;
mod extract;
mod logging;
mod routes;
mod state;

pub use config::{
    AuthConfig, Config, CorsConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use error::ApiError;
pub use extract::AuthUser;
pub use logging::init as init_logging;
pub use routes::router;
pub use state::{AppState, AuthSettings};
