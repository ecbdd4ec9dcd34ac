//! HTTP Handlers
//!
//! All routes sit behind the auth guard; handlers read the caller's
//! identity from the `CurrentUser` request extension.

use axum::Json;
use axum::extract::{Path, State};
use axum::Extension;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostInput, DeletePostUseCase,
    GetPublicPostUseCase, ListMyDraftsUseCase, ListMyPostsUseCase, ListPublicPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use crate::presentation::dto::{
    CreatePostRequest, MessageResponse, PostResponse, PublicPostResponse, UpdatePostRequest,
};
use kernel::id::PostId;
use kernel::identity::CurrentUser;

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<P>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<P>,
}

/// POST /api/posts
pub async fn create_post<P>(
    State(state): State<PostsAppState<P>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(CreatePostInput {
            user_id: current_user.user_id,
            title: req.title,
            content: req.content,
            status: req.status,
        })
        .await?;

    Ok(Json(post.into()))
}

/// GET /api/me/posts
pub async fn list_my_posts<P>(
    State(state): State<PostsAppState<P>>,
    Extension(current_user): Extension<CurrentUser>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListMyPostsUseCase::new(state.repo.clone());
    let posts = use_case.execute(current_user.user_id).await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /api/me/posts/draft
pub async fn list_my_drafts<P>(
    State(state): State<PostsAppState<P>>,
    Extension(current_user): Extension<CurrentUser>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListMyDraftsUseCase::new(state.repo.clone());
    let posts = use_case.execute(current_user.user_id).await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /api/posts
pub async fn list_public_posts<P>(
    State(state): State<PostsAppState<P>>,
) -> PostResult<Json<Vec<PublicPostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPublicPostsUseCase::new(state.repo.clone());
    let posts = use_case.execute().await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /api/posts/{id}
pub async fn get_post<P>(
    State(state): State<PostsAppState<P>>,
    Path(id): Path<Uuid>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPublicPostUseCase::new(state.repo.clone());
    let post = use_case.execute(PostId::from_uuid(id)).await?;

    Ok(Json(post.into()))
}

/// PUT /api/posts/{id}
pub async fn update_post<P>(
    State(state): State<PostsAppState<P>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(UpdatePostInput {
            post_id: PostId::from_uuid(id),
            user_id: current_user.user_id,
            title: req.title,
            content: req.content,
            status: req.status,
        })
        .await?;

    Ok(Json(post.into()))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<P>(
    State(state): State<PostsAppState<P>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> PostResult<Json<MessageResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case
        .execute(DeletePostInput {
            post_id: PostId::from_uuid(id),
            user_id: current_user.user_id,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
