//! Expense Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Ownership Model
//! - Every operation runs on behalf of the caller resolved by `auth::require_bearer`
//! - Every store query is conjoined with `userid = caller`
//! - Someone else's expense is indistinguishable from a missing one (404)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ExpenseError, ExpenseResult};
pub use infra::postgres::PgExpenseRepository;
pub use presentation::router::{expense_router, expense_router_generic};

#[cfg(any(test, feature = "test-util"))]
pub use infra::memory::InMemoryExpenseRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
