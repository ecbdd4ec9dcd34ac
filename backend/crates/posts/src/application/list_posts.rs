//! Post Listing Use Cases
//!
//! Three views: everything the caller wrote, the caller's drafts, and
//! the public feed with author profiles.

use std::sync::Arc;

use crate::domain::entity::{Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use kernel::id::UserId;

/// List the caller's posts (all statuses)
pub struct ListMyPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListMyPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> PostResult<Vec<Post>> {
        self.post_repo.list_by_author(&user_id).await
    }
}

/// List the caller's drafts
pub struct ListMyDraftsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListMyDraftsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> PostResult<Vec<Post>> {
        self.post_repo.list_drafts_by_author(&user_id).await
    }
}

/// List all public posts with their authors
pub struct ListPublicPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPublicPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self) -> PostResult<Vec<PostWithAuthor>> {
        self.post_repo.list_public().await
    }
}
