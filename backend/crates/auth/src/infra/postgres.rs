//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{password_history::PasswordHistoryEntry, user::User};
use crate::domain::repository::{PasswordHistoryRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;
use kernel::id::{HistoryEntryId, UserId};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                username,
                password_hash,
                reset_nonce,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.reset_nonce)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                username,
                password_hash,
                reset_nonce,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                username,
                password_hash,
                reset_nonce,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                username = $3,
                password_hash = $4,
                reset_nonce = $5,
                updated_at = $6
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.reset_nonce)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Password History Repository Implementation
// ============================================================================

impl PasswordHistoryRepository for PgAuthRepository {
    async fn append(&self, entry: &PasswordHistoryEntry) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO password_history (
                entry_id,
                user_id,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.entry_id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(entry.password_hash.as_str())
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn recent(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> AuthResult<Vec<PasswordHistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT entry_id, user_id, password_hash, created_at
            FROM password_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_entry()).collect())
    }

    async fn list_all(&self, user_id: &UserId) -> AuthResult<Vec<PasswordHistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT entry_id, user_id, password_hash, created_at
            FROM password_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_entry()).collect())
    }

    async fn delete(&self, entry_ids: &[HistoryEntryId]) -> AuthResult<u64> {
        if entry_ids.is_empty() {
            return Ok(0);
        }

        let ids: Vec<Uuid> = entry_ids.iter().map(|id| id.into_uuid()).collect();

        let deleted = sqlx::query("DELETE FROM password_history WHERE entry_id = ANY($1)")
            .bind(&ids)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    username: String,
    password_hash: String,
    reset_nonce: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            username: UserName::from_db(self.username),
            password_hash: HashedPassword::from_stored(self.password_hash),
            reset_nonce: self.reset_nonce,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    entry_id: Uuid,
    user_id: Uuid,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl HistoryRow {
    fn into_entry(self) -> PasswordHistoryEntry {
        PasswordHistoryEntry {
            entry_id: HistoryEntryId::from_uuid(self.entry_id),
            user_id: UserId::from_uuid(self.user_id),
            password_hash: HashedPassword::from_stored(self.password_hash),
            created_at: self.created_at,
        }
    }
}
