//! Password Rotation
//!
//! The shared tail of the reset and change flows: the history rule,
//! the write of the new hash and the pruning of stale history rows.

use platform::password::ClearTextPassword;

use crate::domain::entity::{password_history::PasswordHistoryEntry, user::User};
use crate::domain::repository::{PasswordHistoryRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use kernel::id::{HistoryEntryId, UserId};

/// How many previous passwords a new one is checked against, and how
/// many history rows survive a rotation.
pub(crate) const HISTORY_DEPTH: usize = 3;

/// Reject a candidate that matches any of the recent password hashes
pub(crate) async fn check_reuse<H>(
    history_repo: &H,
    user_id: &UserId,
    candidate: &ClearTextPassword,
) -> AuthResult<()>
where
    H: PasswordHistoryRepository,
{
    let recent = history_repo.recent(user_id, HISTORY_DEPTH as i64).await?;

    for entry in &recent {
        if entry.password_hash.verify(candidate)? {
            return Err(AuthError::PasswordReused);
        }
    }

    Ok(())
}

/// Install a new password and update the history
///
/// Hashes the candidate, writes it to the user (clearing any pending
/// reset nonce), appends a history entry, then prunes the history back
/// down to [`HISTORY_DEPTH`] rows. Callers run [`check_reuse`] first.
pub(crate) async fn rotate<U, H>(
    user_repo: &U,
    history_repo: &H,
    mut user: User,
    new_password: &ClearTextPassword,
) -> AuthResult<()>
where
    U: UserRepository,
    H: PasswordHistoryRepository,
{
    let new_hash = new_password.hash()?;

    user.set_password(new_hash.clone());
    user_repo.update(&user).await?;

    let entry = PasswordHistoryEntry::new(user.user_id, new_hash);
    history_repo.append(&entry).await?;

    prune(history_repo, &user.user_id).await
}

/// Delete history entries beyond the newest [`HISTORY_DEPTH`]
async fn prune<H>(history_repo: &H, user_id: &UserId) -> AuthResult<()>
where
    H: PasswordHistoryRepository,
{
    let all = history_repo.list_all(user_id).await?;

    if all.len() > HISTORY_DEPTH {
        let stale: Vec<HistoryEntryId> = all[HISTORY_DEPTH..]
            .iter()
            .map(|entry| entry.entry_id)
            .collect();
        let removed = history_repo.delete(&stale).await?;
        tracing::debug!(user_id = %user_id, removed, "Pruned password history");
    }

    Ok(())
}
