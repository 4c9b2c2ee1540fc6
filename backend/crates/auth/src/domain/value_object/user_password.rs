//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. The raw value never leaves
//! this module unhashed.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("hunter2!".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Errors
    /// `AuthError::Validation` carrying the policy message
    pub fn new(raw: String) -> AuthResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|e| AuthError::Validation(e.to_string()))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        raw.0
            .hash(pepper)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash (constant time)
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
