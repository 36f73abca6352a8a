//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewBlogPost, PostPatch};
use blog_core::error::StoreError;
use blog_core::ports::PostStore;

use super::connections::{self, DatabaseConfig};
use super::entity::post::{self, Entity as PostEntity};

/// Post store backed by the `posts` table.
pub struct PostgresPostStore {
    pub(crate) db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Connect using `config` and wrap the pool.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let db = connections::connect(config).await.map_err(map_db_err)?;
        Ok(Self::new(db))
    }

    pub fn connection(&self) -> &DbConn {
        &self.db
    }
}

fn map_db_err(err: DbErr) -> StoreError {
    match err {
        DbErr::ConnectionAcquire(e) => StoreError::Connection(e.to_string()),
        DbErr::Conn(e) => StoreError::Connection(e.to_string()),
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => StoreError::NotFound,
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, StoreError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let created: Vec<BlogPost> = posts.into_iter().map(BlogPost::create).collect();
        let models: Vec<post::ActiveModel> = created.iter().cloned().map(Into::into).collect();

        let rows = PostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;
        tracing::debug!(rows, "Inserted posts");

        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, StoreError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<BlogPost, StoreError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(StoreError::NotFound)?;

        if patch.is_empty() {
            return Ok(model.into());
        }

        let mut active: post::ActiveModel = model.into();
        active.apply_patch(patch);
        // A single UPDATE statement, so the patch lands whole or not at all.
        let updated = active.update(&self.db).await.map_err(map_db_err)?;

        Ok(updated.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            tracing::debug!(post_id = %id, "Delete of missing post ignored");
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        tracing::warn!(rows = result.rows_affected, "Dropped all posts");
        Ok(())
    }
}
