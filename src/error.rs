//! Unified error type for the bloglist library.
//!
//! This module provides a single [`Error`] type that encompasses all errors
//! that can occur in the library, making it easier to handle errors in
//! application code.

use thiserror::Error;

#[cfg(feature = "auth")]
use crate::auth::AuthError;
use crate::stats::StatsError;
#[cfg(feature = "store")]
use crate::store::StoreError;

/// Unified error type for all bloglist operations.
///
/// This enum wraps all module-specific error types, allowing callers to
/// use a single error type throughout their application.
///
/// # Example
///
/// ```ignore
/// use bloglist::{Result, BlogStore};
///
/// fn do_something() -> Result<()> {
///     let store = BlogStore::open(Path::new(".bloglist"))?;
///     let blogs = store.list_blogs()?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from statistics computation.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Error from document store operations.
    #[cfg(feature = "store")]
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Error from password or token handling.
    #[cfg(feature = "auth")]
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a statistics error.
    pub fn is_stats(&self) -> bool {
        matches!(self, Self::Stats(_))
    }

    /// Returns `true` if this is a document store error.
    #[cfg(feature = "store")]
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns `true` if this is an authentication error.
    #[cfg(feature = "auth")]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
