use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, NewBlogPost, PostPatch};
use crate::error::StoreError;

/// Blog post store - abstraction over persistence backends (Postgres, in-memory).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist new posts, assigning `id` and `created`. Returns them in input order.
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, StoreError>;

    /// Every stored post, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Find a post by id. A missing post is `Ok(None)`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, StoreError>;

    /// Apply a partial update and return the updated post.
    ///
    /// Fails with [`StoreError::NotFound`] if no post has this id.
    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<BlogPost, StoreError>;

    /// Delete a post. Deleting a missing post succeeds.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Remove every post.
    async fn drop_all(&self) -> Result<(), StoreError>;
}
