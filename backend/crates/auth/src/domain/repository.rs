//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{password_history::PasswordHistoryEntry, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;
use kernel::id::{HistoryEntryId, UserId};

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update user (password hash, reset nonce)
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Password history repository trait
///
/// Entries are always returned newest first.
#[trait_variant::make(PasswordHistoryRepository: Send)]
pub trait LocalPasswordHistoryRepository {
    /// Append a new history entry
    async fn append(&self, entry: &PasswordHistoryEntry) -> AuthResult<()>;

    /// The `limit` most recent entries for a user
    async fn recent(&self, user_id: &UserId, limit: i64) -> AuthResult<Vec<PasswordHistoryEntry>>;

    /// All entries for a user
    async fn list_all(&self, user_id: &UserId) -> AuthResult<Vec<PasswordHistoryEntry>>;

    /// Delete entries by ID, returning how many were removed
    async fn delete(&self, entry_ids: &[HistoryEntryId]) -> AuthResult<u64>;
}
