//! Common test utilities and fixtures.
//!
//! This module provides a test application wrapper and helper functions to
//! reduce duplication across the HTTP API test suite.

#![cfg(feature = "server")]

use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;

use bloglist::server::{
    AppState, AuthConfig, Config, CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig, router,
};

/// Test application wrapper that manages a temporary store.
pub struct TestApp {
    pub server: TestServer,
    _temp_dir: TempDir, // Keep alive for test duration
}

impl TestApp {
    /// Create a new test application with a fresh temporary store.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("db");
        let config = Config {
            server: ServerConfig {
                bind: "127.0.0.1".into(),
                port: 0,
                static_path: None,
            },
            database: DatabaseConfig {
                path: db_path.to_string_lossy().into(),
            },
            auth: AuthConfig {
                secret: "test-secret".into(),
                token_ttl_secs: 3600,
            },
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
        };
        let state = AppState::from_config(&config)?;
        let server = TestServer::new(router(state))?;
        Ok(Self {
            server,
            _temp_dir: temp_dir,
        })
    }

    /// Create a user account and return its id.
    pub async fn create_user(&self, username: &str, password: &str) -> anyhow::Result<String> {
        let response = self
            .server
            .post("/api/users")
            .json(&json!({
                "username": username,
                "name": "Test User",
                "password": password,
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        Ok(body["id"].as_str().unwrap_or_default().to_string())
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> anyhow::Result<String> {
        let response = self
            .server
            .post("/api/login")
            .json(&json!({ "username": username, "password": password }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        Ok(body["token"].as_str().unwrap_or_default().to_string())
    }

    /// Create a user account, log in, and return the bearer token.
    pub async fn signup_and_login(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<String> {
        self.create_user(username, password).await?;
        self.login(username, password).await
    }

    /// Create a blog with the given token and return the created record.
    pub async fn create_blog(
        &self,
        token: &str,
        title: &str,
        author: &str,
        url: &str,
        likes: u64,
    ) -> anyhow::Result<Value> {
        let response = self
            .server
            .post("/api/blogs")
            .add_header(AUTHORIZATION, format!("Bearer {}", token))
            .json(&json!({
                "title": title,
                "author": author,
                "url": url,
                "likes": likes,
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        Ok(response.json())
    }

    /// Fetch the current blog list.
    pub async fn list_blogs(&self) -> Vec<Value> {
        let response = self.server.get("/api/blogs").await;
        response.assert_status_ok();
        response.json()
    }
}

/// Assert that a JSON error response carries the expected error code.
pub fn assert_error_code(body: &Value, expected: &str) {
    assert_eq!(
        body["error"]["code"].as_str(),
        Some(expected),
        "unexpected error body: {body}"
    );
}
