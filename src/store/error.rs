//! Error types for the document store module.

use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Store not initialized at {0}")]
    NotInitialized(String),
}
