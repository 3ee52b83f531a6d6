//! Data types for the document store module.

use serde::{Deserialize, Serialize};

/// A user account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier assigned by the store.
    pub id: String,

    /// Login name. Unique across the store.
    pub username: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Bcrypt hash of the password. Never exposed through the API.
    pub password_hash: String,

    /// Ids of the blogs created by this user.
    #[serde(default)]
    pub blogs: Vec<String>,
}

/// Input for creating a blog record. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user: Option<String>,
}

impl NewBlog {
    /// Create input with the given title and url. Likes default to zero.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            url: url.into(),
            likes: 0,
            user: None,
        }
    }

    /// Set the author name.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the initial like count.
    #[must_use]
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    /// Set the creating user id.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Partial update for a blog record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

/// Input for creating a user account. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    /// Create input with the given username and password hash.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: None,
            password_hash: password_hash.into(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
