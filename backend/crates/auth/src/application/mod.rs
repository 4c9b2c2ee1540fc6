//! Application Layer
//!
//! Use cases and application services.

pub mod change_password;
pub mod config;
pub mod current_user;
pub mod login;
pub mod register;
pub mod token;

use crate::domain::entity::user::User;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{TokenClaims, TokenService};

/// Result of a successful register or login
#[derive(Debug)]
pub struct AuthOutput {
    pub user: User,
    /// Bearer token for the `Authorization` header
    pub token: String,
}
