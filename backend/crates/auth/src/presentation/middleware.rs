//! Auth Middleware
//!
//! Bearer-token guard for protected routes. On success the resolved
//! [`CurrentUser`] is inserted into request extensions for downstream
//! handlers; on failure the request never reaches them.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::guard;
use crate::domain::repository::UserRepository;

/// Guard middleware state
#[derive(Clone)]
pub struct AuthGuardState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer_auth<R>(
    State(state): State<AuthGuardState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_owned());

    let tokens = state.config.token_service();

    match guard::authorize(authorization.as_deref(), &tokens, state.repo.as_ref()).await {
        Ok(current_user) => {
            req.extensions_mut().insert(current_user);
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}
