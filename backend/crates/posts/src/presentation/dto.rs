//! Data Transfer Objects
//!
//! Request/Response structures for the HTTP API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{Post, PostStatus, PostWithAuthor};

// ============================================================================
// Requests
// ============================================================================

/// Create post request; status defaults to draft when absent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub status: Option<PostStatus>,
}

/// Update post request; absent fields are left unchanged
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
}

// ============================================================================
// Responses
// ============================================================================

/// Post response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id.into_uuid(),
            user_id: post.user_id.into_uuid(),
            title: post.title,
            content: post.content,
            status: post.status,
            created_at_ms: post.created_at.timestamp_millis(),
            updated_at_ms: post.updated_at.timestamp_millis(),
        }
    }
}

/// Author profile attached to a public post
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub username: String,
    pub email: String,
}

/// Public post with its author
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPostResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author: AuthorResponse,
}

impl From<PostWithAuthor> for PublicPostResponse {
    fn from(entry: PostWithAuthor) -> Self {
        Self {
            post: entry.post.into(),
            author: AuthorResponse {
                username: entry.author_name,
                email: entry.author_email,
            },
        }
    }
}

/// Generic message response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
