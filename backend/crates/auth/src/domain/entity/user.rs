//! User Entity
//!
//! Account record carrying the credential state: the current password
//! hash and, while a reset is in flight, the single-use reset nonce.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use uuid::Uuid;

use crate::domain::value_object::{email::Email, user_name::UserName};
use kernel::id::UserId;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email address (unique, the login identifier)
    pub email: Email,
    /// Display name
    pub username: UserName,
    /// Current password hash
    pub password_hash: HashedPassword,
    /// Pending reset nonce; `None` when no reset is in flight
    pub reset_nonce: Option<Uuid>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: UserName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            username,
            password_hash,
            reset_nonce: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Begin a password reset
    ///
    /// Overwrites any pending nonce, so only the most recently issued
    /// reset token can complete.
    pub fn start_reset(&mut self, nonce: Uuid) {
        self.reset_nonce = Some(nonce);
        self.updated_at = Utc::now();
    }

    /// Check a token nonce against the pending one
    pub fn nonce_matches(&self, nonce: Uuid) -> bool {
        self.reset_nonce == Some(nonce)
    }

    /// Install a new password hash
    ///
    /// Clears the pending reset nonce: once a password changes, by any
    /// route, outstanding reset tokens are dead.
    pub fn set_password(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
        self.reset_nonce = None;
        self.updated_at = Utc::now();
    }
}
