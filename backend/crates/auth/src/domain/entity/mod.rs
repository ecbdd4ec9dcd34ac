pub mod password_history;
pub mod user;

pub use password_history::PasswordHistoryEntry;
pub use user::User;
