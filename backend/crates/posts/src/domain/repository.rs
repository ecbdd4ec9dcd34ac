//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{Post, PostWithAuthor};
use crate::error::PostResult;
use kernel::id::{PostId, UserId};

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID, regardless of status
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// All posts by an author, newest first
    async fn list_by_author(&self, user_id: &UserId) -> PostResult<Vec<Post>>;

    /// Draft posts by an author, newest first
    async fn list_drafts_by_author(&self, user_id: &UserId) -> PostResult<Vec<Post>>;

    /// All public posts with their authors, newest first
    async fn list_public(&self) -> PostResult<Vec<PostWithAuthor>>;

    /// Update a post
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// Delete a post
    async fn delete(&self, post_id: &PostId) -> PostResult<()>;
}
