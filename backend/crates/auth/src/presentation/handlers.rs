//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::Extension;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, ForgotPasswordInput, ForgotPasswordUseCase,
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, ResetPasswordInput,
    ResetPasswordUseCase,
};
use crate::domain::repository::{PasswordHistoryRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    ChangePasswordRequest, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest,
    LoginResponse, MessageResponse, RegisterRequest, ResetPasswordRequest, ResetTokenQuery,
};
use kernel::identity::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + PasswordHistoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + PasswordHistoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone());

    let input = RegisterInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "User registered successfully".to_string(),
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + PasswordHistoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Forgot Password
// ============================================================================

/// POST /api/forgot-password
pub async fn forgot_password<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AuthResult<Json<ForgotPasswordResponse>>
where
    R: UserRepository + PasswordHistoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ForgotPasswordUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(ForgotPasswordInput { email: req.email })
        .await?;

    Ok(Json(ForgotPasswordResponse {
        message: "Password reset link generated".to_string(),
        url: output.url,
    }))
}

// ============================================================================
// Reset Password
// ============================================================================

/// POST /api/reset-password?token=...
pub async fn reset_password<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<ResetTokenQuery>,
    Json(req): Json<ResetPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + PasswordHistoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ResetPasswordUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = ResetPasswordInput {
        token: query.token,
        new_password: req.new_password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}

// ============================================================================
// Change Password
// ============================================================================

/// PUT /api/change-password (behind the access guard)
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + PasswordHistoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.repo.clone());

    let input = ChangePasswordInput {
        user_id: current_user.user_id,
        old_password: req.old_password,
        new_password: req.new_password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}
