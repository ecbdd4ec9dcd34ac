//! Register Use Case
//!
//! Creates a new account and seeds its password history.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::{password_history::PasswordHistoryEntry, user::User};
use crate::domain::repository::{PasswordHistoryRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHistoryRepository,
{
    user_repo: Arc<U>,
    history_repo: Arc<H>,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHistoryRepository,
{
    pub fn new(user_repo: Arc<U>, history_repo: Arc<H>) -> Self {
        Self {
            user_repo,
            history_repo,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if input.username.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.trim().is_empty()
        {
            return Err(AuthError::Validation(
                "Please fill all the fields".to_string(),
            ));
        }

        let username = UserName::new(&input.username)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password.hash()?;

        let user = User::new(username, email, password_hash.clone());
        self.user_repo.create(&user).await?;

        // The initial password counts against the reuse window, so it is
        // part of the history from day one.
        let entry = PasswordHistoryEntry::new(user.user_id, password_hash);
        self.history_repo.append(&entry).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
