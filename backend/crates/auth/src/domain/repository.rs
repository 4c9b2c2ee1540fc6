//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{UserId, account_name::AccountName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return it with its assigned id
    ///
    /// Fails with `AuthError::AccountNameTaken` if the account name exists.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by account name (exact match)
    async fn find_by_account_name(&self, acc_name: &AccountName) -> AuthResult<Option<User>>;

    /// Check if account name exists
    async fn exists_by_account_name(&self, acc_name: &AccountName) -> AuthResult<bool>;

    /// Persist the user's password hash if it changed since load
    ///
    /// A user whose `password_changed()` is false is a no-op.
    async fn update_password(&self, user: &User) -> AuthResult<()>;
}
