//! Login Use Case
//!
//! Authenticates a user and issues a bearer token good for one day.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    pub user_id: UserId,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::Validation(
                "Please fill all the fields".to_string(),
            ));
        }

        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password = ClearTextPassword::new(input.password)?;
        if !user.password_hash.verify(&password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.config.token_service().issue(
            user.user_id.into_uuid(),
            None,
            self.config.login_ttl(),
        );

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
        })
    }
}
