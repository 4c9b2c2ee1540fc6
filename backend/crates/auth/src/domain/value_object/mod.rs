//! Value Object Module

pub mod account_name;
pub mod display_name;
pub mod name;
pub mod user_password;

pub use kernel::id::UserId;
