//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with account name + password
//! - Stateless HS256 bearer tokens (30 day lifetime)
//! - `require_bearer` middleware and `CurrentUser` extractor for other crates
//! - Password change with current-password confirmation
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application-wide pepper
//! - Login failures never reveal whether the account exists
//! - Storage errors are logged, never returned to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenClaims, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, CurrentUser, require_bearer};
pub use presentation::router::{auth_router, auth_router_generic};

#[cfg(any(test, feature = "test-util"))]
pub use infra::memory::InMemoryUserRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
