//! Create Post Use Case
//!
//! A post may be created directly as public; without an explicit
//! status it starts as a draft.

use std::sync::Arc;

use crate::domain::entity::{Post, PostStatus};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use kernel::id::UserId;

/// Create post input; `status` of `None` means draft
pub struct CreatePostInput {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub status: Option<PostStatus>,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<Post> {
        if input.title.trim().is_empty() || input.content.trim().is_empty() {
            return Err(PostError::Validation(
                "Please fill all the fields".to_string(),
            ));
        }

        let mut post = Post::new(input.user_id, input.title, input.content);
        if let Some(status) = input.status {
            post.status = status;
        }
        self.post_repo.create(&post).await?;

        tracing::info!(post_id = %post.post_id, user_id = %post.user_id, "Post created");

        Ok(post)
    }
}
