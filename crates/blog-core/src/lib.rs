//! # Blog Core
//!
//! The domain layer of the blog post service.
//! This crate contains the post model, its error taxonomy and the store port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use domain::{Author, BlogPost, NewBlogPost, PostPatch};
pub use error::{DomainError, StoreError};
pub use ports::PostStore;
