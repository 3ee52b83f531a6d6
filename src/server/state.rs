//! Application state management.

use std::sync::Arc;

use crate::store::BlogStore;

use super::config::Config;

/// Token settings shared by the login endpoint and the auth extractor.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Secret used to sign and verify session tokens.
    pub secret: String,
    /// Session token lifetime in seconds.
    pub token_ttl_secs: u64,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<BlogStore>,
    auth: Arc<AuthSettings>,
}

impl AppState {
    /// Create a new AppState from configuration, opening the store at the
    /// configured path or initializing a fresh one.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let path = std::path::Path::new(&config.database.path);
        let store = BlogStore::open_or_init(path).map_err(|e| StateError::OpenStore {
            path: config.database.path.clone(),
            source: e,
        })?;

        Ok(Self {
            store: Arc::new(store),
            auth: Arc::new(AuthSettings {
                secret: config.auth.secret.clone(),
                token_ttl_secs: config.auth.token_ttl_secs,
            }),
        })
    }

    /// The document store.
    pub fn store(&self) -> &BlogStore {
        &self.store
    }

    /// The token settings.
    pub fn auth(&self) -> &AuthSettings {
        &self.auth
    }
}

/// Errors that can occur when setting up application state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to open or initialize the document store.
    OpenStore {
        path: String,
        source: crate::store::StoreError,
    },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OpenStore { path, source } => {
                write!(f, "Failed to open store at '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StateError {}
