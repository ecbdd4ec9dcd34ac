//! Auth (Credential) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (login, register, reset, change, guard)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, guard middleware
//!
//! ## Features
//! - User registration and login with email + password
//! - Signed, time-bounded bearer tokens (1 day login / 1 hour reset)
//! - Password reset bound to a single-use persisted nonce
//! - Reuse prevention against the 3 most recent passwords, with history
//!   pruned to 3 entries per user after every rotation
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (work factor 10)
//! - Token verification is all-or-nothing; rejection reasons never leak
//! - The access guard re-resolves the user on every protected request, so
//!   a token dies with its account

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as CredentialStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
