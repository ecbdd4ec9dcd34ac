//! Access Guard
//!
//! Resolves a request identity from an `Authorization: Bearer` header.
//! Every failure mode collapses to [`AuthError::Unauthorized`]: a caller
//! learns nothing about whether the header was missing, the signature
//! bad, the token expired or the account gone.

use platform::token::TokenService;

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;
use kernel::identity::CurrentUser;

/// Authorize a request from its raw `Authorization` header value
///
/// The user is re-resolved from storage on every call, so deleting an
/// account invalidates its outstanding tokens immediately.
pub async fn authorize<U>(
    authorization: Option<&str>,
    tokens: &TokenService,
    user_repo: &U,
) -> AuthResult<CurrentUser>
where
    U: UserRepository,
{
    let header = authorization.ok_or(AuthError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Unauthorized)?;

    let claims = tokens
        .verify(token)
        .map_err(|_| AuthError::Unauthorized)?;

    let user_id = UserId::from_uuid(claims.sub);
    if user_repo.find_by_id(&user_id).await?.is_none() {
        return Err(AuthError::Unauthorized);
    }

    Ok(CurrentUser::new(user_id))
}
