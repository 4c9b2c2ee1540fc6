//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, base64url, random bytes)
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
