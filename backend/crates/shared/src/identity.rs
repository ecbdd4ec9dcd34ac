//! Request-Scoped Identity
//!
//! The access guard resolves the bearer token to a [`CurrentUser`] and
//! attaches it to the request as an extension. Downstream handlers extract
//! it explicitly instead of re-verifying the token. The value is plain data:
//! it carries no proof of authentication by itself and must only ever be
//! inserted by the guard.

use crate::id::UserId;

/// Identity of the authenticated caller for the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    /// The resolved user's ID (confirmed to exist at guard time)
    pub user_id: UserId,
}

impl CurrentUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_carries_id() {
        let user_id = UserId::new();
        let current = CurrentUser::new(user_id);
        assert_eq!(current.user_id, user_id);
    }
}
