pub mod change_password;
pub mod config;
pub mod forgot_password;
pub mod guard;
pub mod login;
pub mod register;
pub mod reset_password;
mod rotation;

pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use forgot_password::{ForgotPasswordInput, ForgotPasswordOutput, ForgotPasswordUseCase};
pub use guard::authorize;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use reset_password::{ResetPasswordInput, ResetPasswordUseCase};
