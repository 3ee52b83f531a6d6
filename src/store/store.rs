//! Document store implementation using fjall.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};
use uuid::Uuid;

use crate::blog::Blog;
use crate::logging::{debug, info};

use super::error::StoreError;
use super::format::{decode_document, encode_document};
use super::types::{BlogUpdate, NewBlog, NewUser, User};

/// Meta keyspace key holding the store version.
const META_CONFIG_KEY: &str = "config";

/// Keyspace names for the two collections.
const BLOGS_KEYSPACE: &str = "blogs";
const USERS_KEYSPACE: &str = "users";

/// Key prefix for the username index inside the users keyspace. User ids are
/// UUIDs and never collide with this prefix.
const USERNAME_PREFIX: &str = "byname/";

/// Current store version.
const STORE_VERSION: u32 = 1;

/// Document store backed by fjall.
pub struct BlogStore {
    db: fjall::Database,
}

impl BlogStore {
    /// Open an existing store at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotInitialized(path.display().to_string()));
        }

        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace("_meta", KeyspaceCreateOptions::default)?;

        // Verify store version
        if let Some(config) = meta.get(META_CONFIG_KEY)? {
            let version = u32::from_le_bytes(
                config
                    .as_ref()
                    .try_into()
                    .map_err(|_| StoreError::InvalidFormat("Invalid config format".to_string()))?,
            );
            if version != STORE_VERSION {
                return Err(StoreError::InvalidFormat(format!(
                    "Store version mismatch: expected {}, got {}",
                    STORE_VERSION, version
                )));
            }
        } else {
            return Err(StoreError::NotInitialized(path.display().to_string()));
        }

        info!(path = %path.display(), "opened blog store");
        Ok(Self { db })
    }

    /// Initialize a new store at the given path.
    pub fn init(path: &Path) -> Result<Self, StoreError> {
        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace("_meta", KeyspaceCreateOptions::default)?;

        // Write store version
        meta.insert(META_CONFIG_KEY, STORE_VERSION.to_le_bytes())?;
        db.persist(PersistMode::SyncAll)?;

        info!(path = %path.display(), "initialized blog store");
        Ok(Self { db })
    }

    /// Open an existing store, or initialize a fresh one if the path does not
    /// exist yet.
    pub fn open_or_init(path: &Path) -> Result<Self, StoreError> {
        if path.exists() {
            Self::open(path)
        } else {
            Self::init(path)
        }
    }

    // Blog operations

    /// Add a blog record. The store assigns the id; when a creating user is
    /// given, the blog id is appended to that user's blog list.
    pub fn add_blog(&self, new: NewBlog) -> Result<Blog, StoreError> {
        let id = Uuid::new_v4().to_string();

        let mut blog = Blog::new(id.clone(), new.title, new.url).with_likes(new.likes);
        blog.author = new.author;

        if let Some(user_id) = new.user {
            let users = self.users_keyspace()?;
            let Some(mut user) = self.load_user(&users, &user_id)? else {
                return Err(StoreError::UserNotFound(user_id));
            };
            user.blogs.push(id.clone());
            users.insert(&user.id, encode_document(&user)?)?;
            blog.user = Some(user_id);
        }

        let blogs = self.blogs_keyspace()?;
        blogs.insert(&id, encode_document(&blog)?)?;
        self.db.persist(PersistMode::SyncAll)?;

        debug!(id = %blog.id, "added blog");
        Ok(blog)
    }

    /// Get a blog record by id.
    pub fn get_blog(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        let blogs = self.blogs_keyspace()?;
        let Some(buffer) = blogs.get(id)? else {
            return Ok(None);
        };
        Ok(Some(decode_document(buffer.as_ref())?))
    }

    /// Apply a partial update to a blog record. Returns the updated record,
    /// or `None` if no record with the id exists.
    pub fn update_blog(&self, id: &str, update: BlogUpdate) -> Result<Option<Blog>, StoreError> {
        let blogs = self.blogs_keyspace()?;
        let Some(buffer) = blogs.get(id)? else {
            return Ok(None);
        };

        let mut blog: Blog = decode_document(buffer.as_ref())?;
        if let Some(title) = update.title {
            blog.title = title;
        }
        if let Some(author) = update.author {
            blog.author = Some(author);
        }
        if let Some(url) = update.url {
            blog.url = url;
        }
        if let Some(likes) = update.likes {
            blog.likes = likes;
        }

        blogs.insert(id, encode_document(&blog)?)?;
        self.db.persist(PersistMode::SyncAll)?;

        debug!(id = id, "updated blog");
        Ok(Some(blog))
    }

    /// Delete a blog record. Returns `true` if a record was removed. The id
    /// is also dropped from the creating user's blog list.
    pub fn delete_blog(&self, id: &str) -> Result<bool, StoreError> {
        let blogs = self.blogs_keyspace()?;
        let Some(buffer) = blogs.get(id)? else {
            return Ok(false);
        };

        let blog: Blog = decode_document(buffer.as_ref())?;
        if let Some(user_id) = &blog.user {
            let users = self.users_keyspace()?;
            if let Some(mut user) = self.load_user(&users, user_id)? {
                user.blogs.retain(|blog_id| blog_id != id);
                users.insert(&user.id, encode_document(&user)?)?;
            }
        }

        blogs.remove(id)?;
        self.db.persist(PersistMode::SyncAll)?;

        debug!(id = id, "deleted blog");
        Ok(true)
    }

    /// List all blog records.
    pub fn list_blogs(&self) -> Result<Vec<Blog>, StoreError> {
        let blogs = self.blogs_keyspace()?;

        let mut records = Vec::new();
        for key in Self::collect_keys(&blogs, "")? {
            let Some(buffer) = blogs.get(&key)? else {
                continue;
            };
            records.push(decode_document(buffer.as_ref())?);
        }

        Ok(records)
    }

    // User operations

    /// Add a user account. Fails if the username is already taken.
    pub fn add_user(&self, new: NewUser) -> Result<User, StoreError> {
        let users = self.users_keyspace()?;

        let index_key = format!("{}{}", USERNAME_PREFIX, new.username);
        if users.get(&index_key)?.is_some() {
            return Err(StoreError::UsernameTaken(new.username));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: new.username,
            name: new.name,
            password_hash: new.password_hash,
            blogs: Vec::new(),
        };

        users.insert(&user.id, encode_document(&user)?)?;
        users.insert(&index_key, user.id.as_bytes())?;
        self.db.persist(PersistMode::SyncAll)?;

        debug!(id = %user.id, username = %user.username, "added user");
        Ok(user)
    }

    /// Get a user account by id.
    pub fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        let users = self.users_keyspace()?;
        self.load_user(&users, id)
    }

    /// Look up a user account by username through the index.
    pub fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users_keyspace()?;

        let index_key = format!("{}{}", USERNAME_PREFIX, username);
        let Some(id_bytes) = users.get(&index_key)? else {
            return Ok(None);
        };
        let id = String::from_utf8_lossy(id_bytes.as_ref()).into_owned();

        self.load_user(&users, &id)
    }

    /// List all user accounts.
    pub fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users_keyspace()?;

        let mut records = Vec::new();
        for key in Self::collect_keys(&users, "")? {
            // Skip username index keys
            if key.starts_with(USERNAME_PREFIX) {
                continue;
            }
            let Some(buffer) = users.get(&key)? else {
                continue;
            };
            records.push(decode_document(buffer.as_ref())?);
        }

        Ok(records)
    }

    // Helper methods

    fn blogs_keyspace(&self) -> Result<Keyspace, StoreError> {
        Ok(self
            .db
            .keyspace(BLOGS_KEYSPACE, KeyspaceCreateOptions::default)?)
    }

    fn users_keyspace(&self) -> Result<Keyspace, StoreError> {
        Ok(self
            .db
            .keyspace(USERS_KEYSPACE, KeyspaceCreateOptions::default)?)
    }

    fn collect_keys(keyspace: &Keyspace, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();

        for kv in keyspace.prefix(prefix) {
            let Ok(key_bytes) = kv.key() else {
                continue;
            };
            keys.push(String::from_utf8_lossy(&key_bytes).into_owned());
        }

        Ok(keys)
    }

    fn load_user(&self, users: &Keyspace, id: &str) -> Result<Option<User>, StoreError> {
        let Some(buffer) = users.get(id)? else {
            return Ok(None);
        };
        Ok(Some(decode_document(buffer.as_ref())?))
    }
}
