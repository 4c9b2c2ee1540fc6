//! In-memory user repository for tests

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, account_name::AccountName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Store {
    next_id: i64,
    users: BTreeMap<UserId, User>,
    password_writes: usize,
}

/// User repository backed by a `BTreeMap`
///
/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<Mutex<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user, as if the account had been deleted out of band
    pub async fn remove(&self, user_id: UserId) {
        self.inner.lock().await.users.remove(&user_id);
    }

    /// Number of password hashes actually written
    pub async fn password_writes(&self) -> usize {
        self.inner.lock().await.password_writes
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut store = self.inner.lock().await;
        if store.users.values().any(|u| u.acc_name == user.acc_name) {
            return Err(AuthError::AccountNameTaken);
        }

        store.next_id += 1;
        let user = User::from_parts(
            UserId::new(store.next_id),
            user.name.clone(),
            user.acc_name.clone(),
            user.password.clone(),
        );
        store.users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.inner.lock().await.users.get(&user_id).cloned())
    }

    async fn find_by_account_name(&self, acc_name: &AccountName) -> AuthResult<Option<User>> {
        let store = self.inner.lock().await;
        Ok(store.users.values().find(|u| &u.acc_name == acc_name).cloned())
    }

    async fn exists_by_account_name(&self, acc_name: &AccountName) -> AuthResult<bool> {
        let store = self.inner.lock().await;
        Ok(store.users.values().any(|u| &u.acc_name == acc_name))
    }

    async fn update_password(&self, user: &User) -> AuthResult<()> {
        if !user.password_changed() {
            return Ok(());
        }

        let mut store = self.inner.lock().await;
        let stored = store
            .users
            .get_mut(&user.user_id)
            .ok_or(AuthError::UserNotFound)?;
        // Reload semantics: what the store holds is a clean entity
        *stored = User::from_parts(
            user.user_id,
            user.name.clone(),
            user.acc_name.clone(),
            user.password().clone(),
        );
        store.password_writes += 1;
        Ok(())
    }
}
