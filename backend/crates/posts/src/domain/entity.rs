//! Post Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::id::{PostId, UserId};

/// Post visibility status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Visible only to the author
    Draft,
    /// Visible to everyone
    Public,
}

impl PostStatus {
    /// Database representation
    pub fn id(self) -> i16 {
        match self {
            PostStatus::Draft => 0,
            PostStatus::Public => 1,
        }
    }

    /// Parse from database representation
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(PostStatus::Draft),
            1 => Some(PostStatus::Public),
            _ => None,
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, PostStatus::Public)
    }
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Draft
    }
}

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    /// Author
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post, starting as a draft
    pub fn new(user_id: UserId, title: String, content: String) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            user_id,
            title,
            content,
            status: PostStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the author
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    /// Apply a partial edit; absent fields are left unchanged
    pub fn apply_edit(
        &mut self,
        title: Option<String>,
        content: Option<String>,
        status: Option<PostStatus>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

/// A public post joined with its author's profile
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_name: String,
    pub author_email: String,
}
