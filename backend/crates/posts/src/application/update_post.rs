//! Update Post Use Case
//!
//! Partial update with an ownership check: only the author may edit.

use std::sync::Arc;

use crate::domain::entity::{Post, PostStatus};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use kernel::id::{PostId, UserId};

/// Update post input; `None` fields are left untouched
pub struct UpdatePostInput {
    pub post_id: PostId,
    pub user_id: UserId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
}

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: UpdatePostInput) -> PostResult<Post> {
        if let Some(title) = &input.title {
            if title.trim().is_empty() {
                return Err(PostError::Validation("Title cannot be empty".to_string()));
            }
        }
        if let Some(content) = &input.content {
            if content.trim().is_empty() {
                return Err(PostError::Validation(
                    "Content cannot be empty".to_string(),
                ));
            }
        }

        let mut post = self
            .post_repo
            .find_by_id(&input.post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        if !post.is_authored_by(&input.user_id) {
            return Err(PostError::Forbidden);
        }

        post.apply_edit(input.title, input.content, input.status);
        self.post_repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, "Post updated");

        Ok(post)
    }
}
