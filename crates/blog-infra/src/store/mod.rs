//! Post store implementations - Postgres and in-memory.

mod memory;

pub use memory::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use crate::database::PostgresPostStore;
