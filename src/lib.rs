//! Blog list service library.
//!
//! This library provides a small blog-listing application core: a blog record
//! model, pure statistics over blog collections, a persistent JSON document
//! store, and token-based authentication, with an HTTP API server on top.
//!
//! # Quick Start
//!
//! ```ignore
//! use bloglist::prelude::*;
//!
//! // Initialize a document store
//! let store = BlogStore::init(Path::new(".bloglist"))?;
//!
//! // Add a blog and compute statistics
//! store.add_blog(NewBlog::new("Go To Statement Considered Harmful", "https://example.com")
//!     .with_author("Edsger W. Dijkstra")
//!     .with_likes(5))?;
//!
//! let blogs = store.list_blogs()?;
//! let total = stats::total_likes(&blogs);
//! ```
//!
//! # Modules
//!
//! - [`blog`] - Blog record model (always available)
//! - [`stats`] - Pure statistics over blog collections (always available)
//! - [`store`] - Persistent document store backed by fjall (requires `store` feature)
//! - [`auth`] - Password hashing and bearer tokens (requires `auth` feature)
//!
//! # Feature Flags
//!
//! - `store` - Enable the document store module (enabled by default)
//! - `auth` - Enable password hashing and token handling
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

#[cfg(feature = "auth")]
pub mod auth;
pub mod blog;
mod logging;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod stats;
#[cfg(feature = "store")]
pub mod store;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the blog model at crate root for convenience
pub use blog::Blog;

// Re-export statistics types at crate root for convenience
pub use stats::{AuthorBlogCount, AuthorLikes, StatsError};

// Re-export store types at crate root for convenience
#[cfg(feature = "store")]
pub use store::{BlogStore, BlogUpdate, NewBlog, NewUser, StoreError, User};

// Re-export auth types at crate root for convenience
#[cfg(feature = "auth")]
pub use auth::{AuthError, Claims};
