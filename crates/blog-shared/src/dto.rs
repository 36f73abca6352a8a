//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author name parts as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to create a blog post.
///
/// Every field is optional here so that missing fields surface as
/// validation errors naming the field rather than as JSON parse errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<AuthorInput>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// New author for an update: a display name or individual parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorUpdate {
    Name(String),
    Parts(AuthorInput),
}

/// Request to update a blog post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// Must match the id in the path when present.
    pub id: Option<Uuid>,
    pub author: Option<AuthorUpdate>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Public representation of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// `"<firstName> <lastName>"`.
    pub author: String,
    pub created: DateTime<Utc>,
}
