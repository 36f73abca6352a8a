//! In-memory post store - used when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewBlogPost, PostPatch};
use blog_core::error::StoreError;
use blog_core::ports::PostStore;

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Writes to a single post are serialized by the lock, so an update is
/// applied to a post entirely or not at all.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, StoreError> {
        let created: Vec<BlogPost> = posts.into_iter().map(BlogPost::create).collect();

        let mut store = self.posts.write().await;
        for post in &created {
            store.insert(post.id, post.clone());
        }

        tracing::debug!(count = created.len(), "Inserted posts");
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let store = self.posts.read().await;
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, StoreError> {
        let store = self.posts.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<BlogPost, StoreError> {
        let mut store = self.posts.write().await;
        let post = store.get_mut(&id).ok_or(StoreError::NotFound)?;
        post.apply(patch);
        Ok(post.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let mut store = self.posts.write().await;
        if store.remove(&id).is_none() {
            tracing::debug!(post_id = %id, "Delete of missing post ignored");
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let store = self.posts.read().await;
        Ok(store.len() as u64)
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        let mut store = self.posts.write().await;
        store.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::Author;
    use blog_core::fixtures::generate_posts;

    #[tokio::test]
    async fn test_insert_many_then_find_all() {
        let store = InMemoryPostStore::new();
        let inputs = generate_posts(10);

        let inserted = store.insert_many(inputs.clone()).await.unwrap();
        assert_eq!(inserted.len(), 10);

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 10);
        for input in &inputs {
            let found = all
                .iter()
                .find(|p| p.title == input.title && p.content == input.content)
                .expect("seeded post should be stored");
            assert_eq!(found.author, input.author);
        }
        assert_eq!(store.count().await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let store = InMemoryPostStore::new();
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created() {
        let store = InMemoryPostStore::new();
        let post = store.insert_many(generate_posts(1)).await.unwrap().remove(0);

        let patch = PostPatch {
            title: Some("Heck Ya".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_id(post.id, patch).await.unwrap();

        assert_eq!(updated.title, "Heck Ya");
        assert_eq!(updated.id, post.id);
        assert_eq!(updated.created, post.created);
        assert_eq!(updated.content, post.content);

        let stored = store.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_author_parts() {
        let store = InMemoryPostStore::new();
        let post = store.insert_many(generate_posts(1)).await.unwrap().remove(0);

        let patch = PostPatch::default().with_author(Author::new("Grady", "Booch"));
        let updated = store.update_by_id(post.id, patch).await.unwrap();
        assert_eq!(updated.author.display_name(), "Grady Booch");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = InMemoryPostStore::new();
        let result = store
            .update_by_id(Uuid::new_v4(), PostPatch::default())
            .await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryPostStore::new();
        let post = store.insert_many(generate_posts(1)).await.unwrap().remove(0);

        store.delete_by_id(post.id).await.unwrap();
        assert!(store.find_by_id(post.id).await.unwrap().is_none());
        store.delete_by_id(post.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_drop_all() {
        let store = InMemoryPostStore::new();
        store.insert_many(generate_posts(10)).await.unwrap();
        store.drop_all().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
