//! # Blog Infrastructure
//!
//! Concrete implementations of the [`PostStore`](blog_core::ports::PostStore) port.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;
pub mod store;

pub use database::DatabaseConfig;
pub use store::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use store::PostgresPostStore;
