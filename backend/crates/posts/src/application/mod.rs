pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::{DeletePostInput, DeletePostUseCase};
pub use get_post::GetPublicPostUseCase;
pub use list_posts::{ListMyDraftsUseCase, ListMyPostsUseCase, ListPublicPostsUseCase};
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
