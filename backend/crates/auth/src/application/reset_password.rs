//! Reset Password Use Case
//!
//! Completes a reset started by the forgot-password flow. The token is
//! accepted only while its nonce is still the one persisted on the
//! user, which makes each token single-use.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::rotation;
use crate::domain::repository::{PasswordHistoryRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Reset password input
pub struct ResetPasswordInput {
    /// Token from the reset link
    pub token: String,
    pub new_password: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHistoryRepository,
{
    user_repo: Arc<U>,
    history_repo: Arc<H>,
    config: Arc<AuthConfig>,
}

impl<U, H> ResetPasswordUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHistoryRepository,
{
    pub fn new(user_repo: Arc<U>, history_repo: Arc<H>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            history_repo,
            config,
        }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> AuthResult<()> {
        let claims = self.config.token_service().verify(&input.token)?;

        // A login token presented here has no nonce and is rejected the
        // same way as a forged one.
        let nonce = claims.nonce.ok_or(AuthError::InvalidToken)?;

        let user_id = UserId::from_uuid(claims.sub);
        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if !user.nonce_matches(nonce) {
            return Err(AuthError::InvalidToken);
        }

        let new_password = ClearTextPassword::new(input.new_password)?;

        rotation::check_reuse(self.history_repo.as_ref(), &user_id, &new_password).await?;
        rotation::rotate(
            self.user_repo.as_ref(),
            self.history_repo.as_ref(),
            user,
            &new_password,
        )
        .await?;

        tracing::info!(user_id = %user_id, "Password reset completed");

        Ok(())
    }
}
