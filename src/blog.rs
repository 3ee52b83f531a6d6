//! Blog record model shared by the store, statistics, and API layers.

use serde::{Deserialize, Serialize};

/// One entry in the blog collection.
///
/// The `id` and `user` fields are opaque identifiers owned by the store; the
/// statistics functions read only `author` and `likes` and never mutate a
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Opaque unique identifier assigned by the store.
    pub id: String,

    /// Blog title. Non-empty.
    pub title: String,

    /// Author name. An absent author is its own grouping key, distinct from
    /// the empty string.
    #[serde(default)]
    pub author: Option<String>,

    /// Link to the entry.
    pub url: String,

    /// Like count.
    #[serde(default)]
    pub likes: u64,

    /// Id of the user that created this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Blog {
    /// Create a record with the given id, title, and url. Author and owner
    /// start out unset, likes at zero.
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
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

    /// Set the like count.
    #[must_use]
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    /// Set the owning user id.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}
