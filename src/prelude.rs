//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use bloglist::prelude::*;
//!
//! let store = BlogStore::init(Path::new(".bloglist"))?;
//! let blogs = store.list_blogs()?;
//! let favorite = stats::favorite_blog(&blogs)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Blog model and statistics
pub use crate::blog::Blog;
pub use crate::stats::{self, AuthorBlogCount, AuthorLikes, StatsError};

// Document store types (requires "store" feature)
#[cfg(feature = "store")]
pub use crate::store::{BlogStore, BlogUpdate, NewBlog, NewUser, StoreError, User};

// Auth types (requires "auth" feature)
#[cfg(feature = "auth")]
pub use crate::auth::{AuthError, Claims};
