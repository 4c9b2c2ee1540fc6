//! API DTOs (Data Transfer Objects)
//!
//! Wire names follow the public API (`accname`, `accpassword`, `_id`).

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Every field is optional so a missing field is a 400 with a readable
/// message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub accname: Option<String>,
    pub accpassword: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub accname: Option<String>,
    pub accpassword: Option<String>,
}

/// Register / login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub accname: String,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            id: user.user_id.get(),
            name: user.name.to_string(),
            accname: user.acc_name.to_string(),
            token,
        }
    }
}

// ============================================================================
// Current User
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub userid: i64,
    pub name: String,
    pub accname: String,
}

impl From<&User> for MeResponse {
    fn from(user: &User) -> Self {
        Self {
            userid: user.user_id.get(),
            name: user.name.to_string(),
            accname: user.acc_name.to_string(),
        }
    }
}

// ============================================================================
// Change Password
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}
