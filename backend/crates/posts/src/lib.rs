//! Posts Backend Module
//!
//! Blog post CRUD behind the access guard. Posts are drafts until their
//! author publishes them; only public posts are visible to other users.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Identity arrives as a [`kernel::identity::CurrentUser`] request
//! extension inserted by the auth guard; this crate never touches
//! tokens or credentials itself.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::{Post, PostStatus};
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;

#[cfg(test)]
mod tests;
