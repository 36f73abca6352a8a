//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::StoreError;
use blog_core::ports::PostStore;
use blog_infra::DatabaseConfig;
use blog_infra::InMemoryPostStore;

#[cfg(feature = "postgres")]
use blog_infra::PostgresPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Wrap an existing store handle.
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostStore::new()))
    }

    /// Build the state for the configured backend.
    ///
    /// No database configured means the in-memory store. A configured but
    /// unreachable database is an error.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> Result<Self, StoreError> {
        let Some(config) = db_config else {
            tracing::warn!("Database URL not set. Running with the in-memory post store.");
            return Ok(Self::in_memory());
        };

        #[cfg(feature = "postgres")]
        let state = {
            use migration::{Migrator, MigratorTrait};

            let store = PostgresPostStore::connect(config).await?;
            Migrator::up(store.connection(), None)
                .await
                .map_err(|e| StoreError::Query(format!("migration failed: {e}")))?;
            tracing::info!("Post store ready (postgres)");

            Self::new(Arc::new(store))
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = config;
            tracing::warn!(
                "Built without postgres feature - ignoring database URL, using in-memory store"
            );
            Self::in_memory()
        };

        Ok(state)
    }
}
