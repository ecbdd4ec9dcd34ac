//! Password History Entry
//!
//! One retired (or current) password hash per row. The store keeps at
//! most the 3 most recent entries per user; older rows are pruned after
//! every rotation.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use kernel::id::{HistoryEntryId, UserId};

/// A single password history entry
#[derive(Debug, Clone)]
pub struct PasswordHistoryEntry {
    pub entry_id: HistoryEntryId,
    pub user_id: UserId,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl PasswordHistoryEntry {
    /// Record a hash for a user, stamped now
    pub fn new(user_id: UserId, password_hash: HashedPassword) -> Self {
        Self {
            entry_id: HistoryEntryId::new(),
            user_id,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
