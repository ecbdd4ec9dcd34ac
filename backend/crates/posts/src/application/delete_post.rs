//! Delete Post Use Case

use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use kernel::id::{PostId, UserId};

/// Delete post input
pub struct DeletePostInput {
    pub post_id: PostId,
    pub user_id: UserId,
}

/// Delete post use case
///
/// Same existence and ownership rules as update.
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: DeletePostInput) -> PostResult<()> {
        let post = self
            .post_repo
            .find_by_id(&input.post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        if !post.is_authored_by(&input.user_id) {
            return Err(PostError::Forbidden);
        }

        self.post_repo.delete(&input.post_id).await?;

        tracing::info!(post_id = %input.post_id, "Post deleted");

        Ok(())
    }
}
