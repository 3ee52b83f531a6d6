//! Integration tests for the document store.

#![cfg(feature = "store")]

use tempfile::TempDir;

use bloglist::store::{BlogStore, BlogUpdate, NewBlog, NewUser, StoreError};

fn fresh_store() -> anyhow::Result<(TempDir, BlogStore)> {
    let temp_dir = TempDir::new()?;
    let store = BlogStore::init(&temp_dir.path().join("db"))?;
    Ok((temp_dir, store))
}

#[test]
fn test_open_of_missing_store_fails() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let result = BlogStore::open(&temp_dir.path().join("missing"));
    assert!(matches!(result, Err(StoreError::NotInitialized(_))));

    Ok(())
}

#[test]
fn test_blog_roundtrip() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    let created = store.add_blog(
        NewBlog::new("First blog", "http://example.com/1")
            .with_author("Alice")
            .with_likes(5),
    )?;

    let loaded = store
        .get_blog(&created.id)?
        .ok_or_else(|| anyhow::anyhow!("blog missing"))?;
    assert_eq!(loaded, created);

    let blogs = store.list_blogs()?;
    assert_eq!(blogs, vec![created]);

    Ok(())
}

#[test]
fn test_blog_partial_update() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    let created = store.add_blog(
        NewBlog::new("First blog", "http://example.com/1")
            .with_author("Alice")
            .with_likes(5),
    )?;

    let updated = store
        .update_blog(
            &created.id,
            BlogUpdate {
                likes: Some(15),
                ..BlogUpdate::default()
            },
        )?
        .ok_or_else(|| anyhow::anyhow!("blog missing"))?;

    assert_eq!(updated.likes, 15);
    assert_eq!(updated.title, "First blog");
    assert_eq!(updated.author.as_deref(), Some("Alice"));

    Ok(())
}

#[test]
fn test_update_of_unknown_blog_returns_none() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    let result = store.update_blog("unknown", BlogUpdate::default())?;
    assert!(result.is_none());

    Ok(())
}

#[test]
fn test_delete_blog() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    let created = store.add_blog(NewBlog::new("First blog", "http://example.com/1"))?;

    assert!(store.delete_blog(&created.id)?);
    assert!(store.get_blog(&created.id)?.is_none());
    // Deleting again is a no-op
    assert!(!store.delete_blog(&created.id)?);

    Ok(())
}

#[test]
fn test_username_must_be_unique() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    store.add_user(NewUser::new("root", "hash-1"))?;

    let result = store.add_user(NewUser::new("root", "hash-2"));
    assert!(matches!(result, Err(StoreError::UsernameTaken(_))));

    Ok(())
}

#[test]
fn test_find_user_by_username() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    let created = store.add_user(NewUser::new("alice", "hash").with_name("Alice"))?;

    let found = store
        .find_user_by_username("alice")?
        .ok_or_else(|| anyhow::anyhow!("user missing"))?;
    assert_eq!(found, created);

    assert!(store.find_user_by_username("bob")?.is_none());

    Ok(())
}

#[test]
fn test_list_users_skips_index_entries() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    store.add_user(NewUser::new("alice", "hash-1"))?;
    store.add_user(NewUser::new("bob", "hash-2"))?;

    let users = store.list_users()?;
    assert_eq!(users.len(), 2);

    Ok(())
}

#[test]
fn test_owner_blog_list_follows_creation_and_deletion() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    let user = store.add_user(NewUser::new("alice", "hash"))?;
    let blog = store.add_blog(
        NewBlog::new("First blog", "http://example.com/1").with_user(user.id.clone()),
    )?;

    let owner = store
        .get_user(&user.id)?
        .ok_or_else(|| anyhow::anyhow!("user missing"))?;
    assert_eq!(owner.blogs, vec![blog.id.clone()]);

    store.delete_blog(&blog.id)?;
    let owner = store
        .get_user(&user.id)?
        .ok_or_else(|| anyhow::anyhow!("user missing"))?;
    assert!(owner.blogs.is_empty());

    Ok(())
}

#[test]
fn test_adding_a_blog_for_an_unknown_user_fails() -> anyhow::Result<()> {
    let (_temp_dir, store) = fresh_store()?;

    let result = store.add_blog(NewBlog::new("First blog", "http://example.com/1").with_user("ghost"));
    assert!(matches!(result, Err(StoreError::UserNotFound(_))));

    Ok(())
}

#[test]
fn test_documents_survive_a_reopen() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("db");

    let created = {
        let store = BlogStore::init(&path)?;
        store.add_blog(
            NewBlog::new("First blog", "http://example.com/1")
                .with_author("Alice")
                .with_likes(5),
        )?
    };

    let store = BlogStore::open(&path)?;
    let blogs = store.list_blogs()?;
    assert_eq!(blogs, vec![created]);

    Ok(())
}
