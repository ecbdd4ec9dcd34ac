//! Unit tests for the posts crate
//!
//! Use cases run against an in-memory repository.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostInput, DeletePostUseCase,
    GetPublicPostUseCase, ListMyDraftsUseCase, ListMyPostsUseCase, ListPublicPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::entity::{Post, PostStatus, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use kernel::id::{PostId, UserId};
use uuid::Uuid;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemPostStore {
    inner: Arc<Mutex<MemInner>>,
}

#[derive(Default)]
struct MemInner {
    posts: Vec<Post>,
    authors: HashMap<Uuid, (String, String)>,
}

impl MemPostStore {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn add_author(&self, user_id: &UserId, username: &str, email: &str) {
        self.inner.lock().unwrap().authors.insert(
            user_id.into_uuid(),
            (username.to_string(), email.to_string()),
        );
    }
}

impl PostRepository for MemPostStore {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.inner.lock().unwrap().posts.push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.posts.iter().find(|p| p.post_id == *post_id).cloned())
    }

    async fn list_by_author(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        let inner = self.inner.lock().unwrap();
        let mut posts: Vec<Post> = inner
            .posts
            .iter()
            .filter(|p| p.user_id == *user_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn list_drafts_by_author(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        let inner = self.inner.lock().unwrap();
        let mut posts: Vec<Post> = inner
            .posts
            .iter()
            .filter(|p| p.user_id == *user_id && p.status == PostStatus::Draft)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn list_public(&self) -> PostResult<Vec<PostWithAuthor>> {
        let inner = self.inner.lock().unwrap();
        let mut entries: Vec<PostWithAuthor> = inner
            .posts
            .iter()
            .filter(|p| p.status == PostStatus::Public)
            .map(|p| {
                let (name, email) = inner
                    .authors
                    .get(p.user_id.as_uuid())
                    .cloned()
                    .unwrap_or_default();
                PostWithAuthor {
                    post: p.clone(),
                    author_name: name,
                    author_email: email,
                }
            })
            .collect();
        entries.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));
        Ok(entries)
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner
            .posts
            .iter_mut()
            .find(|p| p.post_id == post.post_id)
        {
            *existing = post.clone();
        }
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.posts.retain(|p| p.post_id != *post_id);
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

async fn create_post(store: &Arc<MemPostStore>, user_id: UserId, title: &str) -> Post {
    let use_case = CreatePostUseCase::new(store.clone());
    use_case
        .execute(CreatePostInput {
            user_id,
            title: title.to_string(),
            content: "some content".to_string(),
            status: None,
        })
        .await
        .expect("post creation should succeed")
}

async fn publish(store: &Arc<MemPostStore>, post: &Post) {
    let use_case = UpdatePostUseCase::new(store.clone());
    use_case
        .execute(UpdatePostInput {
            post_id: post.post_id,
            user_id: post.user_id,
            title: None,
            content: None,
            status: Some(PostStatus::Public),
        })
        .await
        .expect("publishing should succeed");
}

// ============================================================================
// CRUD
// ============================================================================

mod crud_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_post_defaults_to_draft() {
        let store = MemPostStore::new();
        let author = UserId::new();

        let post = create_post(&store, author, "Hello").await;

        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.user_id, author);
    }

    #[tokio::test]
    async fn test_create_post_directly_as_public() {
        let store = MemPostStore::new();
        let author = UserId::new();
        store.add_author(&author, "alice", "alice@example.com");

        let use_case = CreatePostUseCase::new(store.clone());
        let post = use_case
            .execute(CreatePostInput {
                user_id: author,
                title: "Announcement".to_string(),
                content: "Live right away".to_string(),
                status: Some(PostStatus::Public),
            })
            .await
            .unwrap();

        assert_eq!(post.status, PostStatus::Public);

        // No separate publish step needed.
        let feed = ListPublicPostsUseCase::new(store.clone())
            .execute()
            .await
            .unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].post.post_id, post.post_id);
    }

    #[tokio::test]
    async fn test_create_post_requires_title_and_content() {
        let store = MemPostStore::new();
        let use_case = CreatePostUseCase::new(store.clone());

        let result = use_case
            .execute(CreatePostInput {
                user_id: UserId::new(),
                title: "   ".to_string(),
                content: "body".to_string(),
                status: None,
            })
            .await;

        assert!(matches!(result, Err(PostError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_post_partial_edit() {
        let store = MemPostStore::new();
        let author = UserId::new();
        let post = create_post(&store, author, "Original title").await;

        let use_case = UpdatePostUseCase::new(store.clone());
        let updated = use_case
            .execute(UpdatePostInput {
                post_id: post.post_id,
                user_id: author,
                title: Some("New title".to_string()),
                content: None,
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.content, "some content");
        assert_eq!(updated.status, PostStatus::Draft);
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let store = MemPostStore::new();

        let use_case = UpdatePostUseCase::new(store.clone());
        let result = use_case
            .execute(UpdatePostInput {
                post_id: PostId::new(),
                user_id: UserId::new(),
                title: Some("x".to_string()),
                content: None,
                status: None,
            })
            .await;

        assert!(matches!(result, Err(PostError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_update_by_non_author_forbidden() {
        let store = MemPostStore::new();
        let author = UserId::new();
        let post = create_post(&store, author, "Mine").await;

        let use_case = UpdatePostUseCase::new(store.clone());
        let result = use_case
            .execute(UpdatePostInput {
                post_id: post.post_id,
                user_id: UserId::new(),
                title: Some("Hijacked".to_string()),
                content: None,
                status: None,
            })
            .await;

        assert!(matches!(result, Err(PostError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_post() {
        let store = MemPostStore::new();
        let author = UserId::new();
        let post = create_post(&store, author, "Ephemeral").await;

        let use_case = DeletePostUseCase::new(store.clone());
        use_case
            .execute(DeletePostInput {
                post_id: post.post_id,
                user_id: author,
            })
            .await
            .unwrap();

        let get = GetPublicPostUseCase::new(store.clone());
        let result = get.execute(post.post_id).await;
        assert!(matches!(result, Err(PostError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_delete_by_non_author_forbidden() {
        let store = MemPostStore::new();
        let author = UserId::new();
        let post = create_post(&store, author, "Mine").await;

        let use_case = DeletePostUseCase::new(store.clone());
        let result = use_case
            .execute(DeletePostInput {
                post_id: post.post_id,
                user_id: UserId::new(),
            })
            .await;

        assert!(matches!(result, Err(PostError::Forbidden)));
    }
}

// ============================================================================
// Visibility
// ============================================================================

mod visibility_tests {
    use super::*;

    #[tokio::test]
    async fn test_draft_not_visible_as_public() {
        let store = MemPostStore::new();
        let author = UserId::new();
        let post = create_post(&store, author, "Secret draft").await;

        let use_case = GetPublicPostUseCase::new(store.clone());
        let result = use_case.execute(post.post_id).await;

        // Drafts look like missing posts from the outside.
        assert!(matches!(result, Err(PostError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_published_post_visible() {
        let store = MemPostStore::new();
        let author = UserId::new();
        let post = create_post(&store, author, "Published").await;
        publish(&store, &post).await;

        let use_case = GetPublicPostUseCase::new(store.clone());
        let fetched = use_case.execute(post.post_id).await.unwrap();

        assert_eq!(fetched.post_id, post.post_id);
        assert_eq!(fetched.status, PostStatus::Public);
    }

    #[tokio::test]
    async fn test_public_feed_excludes_drafts_and_carries_author() {
        let store = MemPostStore::new();
        let author = UserId::new();
        store.add_author(&author, "alice", "alice@example.com");

        let draft = create_post(&store, author, "Draft").await;
        let published = create_post(&store, author, "Published").await;
        publish(&store, &published).await;

        let use_case = ListPublicPostsUseCase::new(store.clone());
        let feed = use_case.execute().await.unwrap();

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].post.post_id, published.post_id);
        assert_ne!(feed[0].post.post_id, draft.post_id);
        assert_eq!(feed[0].author_name, "alice");
        assert_eq!(feed[0].author_email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_my_posts_and_drafts_listings() {
        let store = MemPostStore::new();
        let author = UserId::new();
        let other = UserId::new();

        let draft = create_post(&store, author, "Draft").await;
        let published = create_post(&store, author, "Published").await;
        publish(&store, &published).await;
        create_post(&store, other, "Someone else's").await;

        let mine = ListMyPostsUseCase::new(store.clone())
            .execute(author)
            .await
            .unwrap();
        assert_eq!(mine.len(), 2);

        let drafts = ListMyDraftsUseCase::new(store.clone())
            .execute(author)
            .await
            .unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].post_id, draft.post_id);
    }
}

// ============================================================================
// Errors and DTOs
// ============================================================================

mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let test_cases: Vec<(PostError, StatusCode)> = vec![
            (
                PostError::Validation("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (PostError::PostNotFound, StatusCode::NOT_FOUND),
            (PostError::Forbidden, StatusCode::FORBIDDEN),
            (
                PostError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }
}

mod dto_tests {
    use super::*;
    use crate::presentation::dto::*;

    #[test]
    fn test_post_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PostStatus::Draft).unwrap(),
            r#""draft""#
        );
        assert_eq!(
            serde_json::to_string(&PostStatus::Public).unwrap(),
            r#""public""#
        );
    }

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{"title":"T","content":"C","status":"public"}"#;
        let request: CreatePostRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, Some(PostStatus::Public));

        let json = r#"{"title":"T","content":"C"}"#;
        let request: CreatePostRequest = serde_json::from_str(json).unwrap();
        assert!(request.status.is_none());
    }

    #[test]
    fn test_update_request_deserialization() {
        let json = r#"{"title":"New","status":"public"}"#;
        let request: UpdatePostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.title.as_deref(), Some("New"));
        assert!(request.content.is_none());
        assert_eq!(request.status, Some(PostStatus::Public));
    }

    #[test]
    fn test_post_response_serialization() {
        let post = Post::new(UserId::new(), "Title".to_string(), "Body".to_string());
        let response: PostResponse = post.into();

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""postId""#));
        assert!(json.contains(r#""status":"draft""#));
        assert!(json.contains(r#""createdAtMs""#));
    }
}
