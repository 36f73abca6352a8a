use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post, stored as separate name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Split a display name at the first whitespace run.
    ///
    /// `"Grady"` becomes first name `Grady` with an empty last name.
    pub fn from_display_name(name: &str) -> Self {
        let name = name.trim();
        match name.split_once(char::is_whitespace) {
            Some((first, last)) => Self::new(first, last.trim_start()),
            None => Self::new(name, ""),
        }
    }

    /// Display string used in API representations.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Blog post entity as persisted by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Assign a fresh id and creation timestamp to an input document.
    ///
    /// `created` is truncated to microseconds, the precision Postgres keeps,
    /// so the value handed back matches every later read.
    pub fn create(input: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: input.author,
            title: input.title,
            content: input.content,
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Apply the fields present in `patch`. `id` and `created` never change.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(first_name) = patch.author_first_name {
            self.author.first_name = first_name;
        }
        if let Some(last_name) = patch.author_last_name {
            self.author.last_name = last_name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Input for creating a blog post, before the store assigns `id` and `created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl NewBlogPost {
    pub fn new(author: Author, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        Ok(())
    }
}

/// Partial update of a blog post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.author_first_name.is_none()
            && self.author_last_name.is_none()
            && self.title.is_none()
            && self.content.is_none()
    }

    /// Replace both author parts at once.
    pub fn with_author(mut self, author: Author) -> Self {
        self.author_first_name = Some(author.first_name);
        self.author_last_name = Some(author.last_name);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(DomainError::Validation("title must not be empty".into()));
            }
        }
        Ok(())
    }
}
