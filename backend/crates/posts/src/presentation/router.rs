//! Posts Router
//!
//! The guard middleware is applied by the composing application, not
//! here; this router assumes every request already carries a
//! `CurrentUser` extension.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the Posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostRepository) -> Router {
    posts_router_generic(repo)
}

/// Create a generic Posts router for any repository implementation
pub fn posts_router_generic<P>(repo: P) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/posts",
            post(handlers::create_post::<P>).get(handlers::list_public_posts::<P>),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post::<P>)
                .put(handlers::update_post::<P>)
                .delete(handlers::delete_post::<P>),
        )
        .route("/me/posts", get(handlers::list_my_posts::<P>))
        .route("/me/posts/draft", get(handlers::list_my_drafts::<P>))
        .with_state(state)
}
