//! User Entity
//!
//! Account holder. The password is only ever held as a hash; changing it
//! marks the credential dirty so the repository knows to persist it.

use crate::domain::value_object::{
    UserId, account_name::AccountName, display_name::DisplayName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::AuthResult;

/// Persisted user
#[derive(Debug, Clone)]
pub struct User {
    /// Database-issued identifier
    pub user_id: UserId,
    /// Display name
    pub name: DisplayName,
    /// Login identifier (unique)
    pub acc_name: AccountName,
    password: UserPassword,
    password_changed: bool,
}

/// User to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub acc_name: AccountName,
    pub password: UserPassword,
}

impl User {
    /// Rehydrate a stored user
    pub fn from_parts(
        user_id: UserId,
        name: DisplayName,
        acc_name: AccountName,
        password: UserPassword,
    ) -> Self {
        Self {
            user_id,
            name,
            acc_name,
            password,
            password_changed: false,
        }
    }

    pub fn password(&self) -> &UserPassword {
        &self.password
    }

    pub fn verify_password(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.password.verify(raw, pepper)
    }

    /// Replace the credential
    ///
    /// Rehashes only when `raw` differs from the current password. Returns
    /// whether the credential changed.
    pub fn change_password(&mut self, raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<bool> {
        if self.password.verify(raw, pepper) {
            return Ok(false);
        }

        self.password = UserPassword::from_raw(raw, pepper)?;
        self.password_changed = true;
        Ok(true)
    }

    /// Whether the credential has been changed since load
    pub fn password_changed(&self) -> bool {
        self.password_changed
    }
}
