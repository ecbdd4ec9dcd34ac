//! Get Post Use Case

use std::sync::Arc;

use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use kernel::id::PostId;

/// Fetch a single public post
///
/// A draft is reported as not found rather than forbidden, so its
/// existence does not leak to other users.
pub struct GetPublicPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> GetPublicPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId) -> PostResult<Post> {
        let post = self
            .post_repo
            .find_by_id(&post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        if !post.status.is_public() {
            return Err(PostError::PostNotFound);
        }

        Ok(post)
    }
}
