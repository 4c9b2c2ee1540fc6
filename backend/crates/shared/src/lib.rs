//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed numeric identifiers shared by the auth and expense domains
//! - Request extractors that reject with the unified error body
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
