//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Post, PostStatus, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use kernel::id::{PostId, UserId};

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                user_id,
                title,
                content,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.status.id())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, title, content, status, created_at, updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_post()).transpose()
    }

    async fn list_by_author(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, title, content, status, created_at, updated_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_post()).collect()
    }

    async fn list_drafts_by_author(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, title, content, status, created_at, updated_at
            FROM posts
            WHERE user_id = $1 AND status = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(PostStatus::Draft.id())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_post()).collect()
    }

    async fn list_public(&self) -> PostResult<Vec<PostWithAuthor>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT
                p.post_id, p.user_id, p.title, p.content, p.status,
                p.created_at, p.updated_at,
                u.username AS author_name,
                u.email AS author_email
            FROM posts p
            JOIN users u ON u.user_id = p.user_id
            WHERE p.status = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(PostStatus::Public.id())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_post_with_author()).collect()
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3,
                status = $4,
                updated_at = $5
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.status.id())
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<()> {
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> PostResult<Post> {
        let status = PostStatus::from_id(self.status).ok_or_else(|| {
            PostError::Internal(format!("Unknown post status: {}", self.status))
        })?;

        Ok(Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            content: self.content,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    post_id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    author_email: String,
}

impl PostWithAuthorRow {
    fn into_post_with_author(self) -> PostResult<PostWithAuthor> {
        let status = PostStatus::from_id(self.status).ok_or_else(|| {
            PostError::Internal(format!("Unknown post status: {}", self.status))
        })?;

        Ok(PostWithAuthor {
            post: Post {
                post_id: PostId::from_uuid(self.post_id),
                user_id: UserId::from_uuid(self.user_id),
                title: self.title,
                content: self.content,
                status,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_name: self.author_name,
            author_email: self.author_email,
        })
    }
}
