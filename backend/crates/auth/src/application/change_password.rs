//! Change Password Use Case
//!
//! Authenticated rotation: the caller proves knowledge of the current
//! password, then the shared rotation rules apply.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::rotation;
use crate::domain::repository::{PasswordHistoryRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Change password input
pub struct ChangePasswordInput {
    /// Identity resolved by the access guard
    pub user_id: UserId,
    pub old_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHistoryRepository,
{
    user_repo: Arc<U>,
    history_repo: Arc<H>,
}

impl<U, H> ChangePasswordUseCase<U, H>
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

    pub async fn execute(&self, input: ChangePasswordInput) -> AuthResult<()> {
        if input.old_password.trim().is_empty() || input.new_password.trim().is_empty() {
            return Err(AuthError::Validation(
                "Please fill all the fields".to_string(),
            ));
        }

        let user = self
            .user_repo
            .find_by_id(&input.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let old_password = ClearTextPassword::new(input.old_password)?;
        if !user.password_hash.verify(&old_password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let new_password = ClearTextPassword::new(input.new_password)?;

        rotation::check_reuse(self.history_repo.as_ref(), &input.user_id, &new_password).await?;
        rotation::rotate(
            self.user_repo.as_ref(),
            self.history_repo.as_ref(),
            user,
            &new_password,
        )
        .await?;

        tracing::info!(user_id = %input.user_id, "Password changed");

        Ok(())
    }
}
