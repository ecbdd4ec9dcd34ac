//! Forgot Password Use Case
//!
//! Starts a password reset: mints a fresh nonce, persists it on the
//! user and wraps it in a short-lived signed token.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Forgot password input
pub struct ForgotPasswordInput {
    pub email: String,
}

/// Forgot password output
pub struct ForgotPasswordOutput {
    /// Reset link carrying the token as a query parameter
    pub url: String,
}

/// Forgot password use case
pub struct ForgotPasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ForgotPasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: ForgotPasswordInput) -> AuthResult<ForgotPasswordOutput> {
        if input.email.trim().is_empty() {
            return Err(AuthError::Validation("Please enter your email".to_string()));
        }

        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Each initiation overwrites the stored nonce; tokens from earlier
        // initiations stop matching the moment this commits. Concurrent
        // initiations race last-writer-wins, which is fine here.
        let nonce = Uuid::new_v4();
        user.start_reset(nonce);
        self.user_repo.update(&user).await?;

        let token = self.config.token_service().issue(
            user.user_id.into_uuid(),
            Some(nonce),
            self.config.reset_ttl(),
        );

        let url = format!("{}?token={}", self.config.reset_link_base, token);

        tracing::info!(user_id = %user.user_id, "Password reset initiated");

        Ok(ForgotPasswordOutput { url })
    }
}
