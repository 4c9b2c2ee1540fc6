//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId, account_name::AccountName, display_name::DisplayName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, accname, accpassword)
            VALUES ($1, $2, $3)
            RETURNING userid, name, accname, accpassword
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.acc_name.as_str())
        .bind(user.password.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AuthError::AccountNameTaken
            }
            e => AuthError::Database(e),
        })?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT userid, name, accname, accpassword
            FROM users
            WHERE userid = $1
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_account_name(&self, acc_name: &AccountName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT userid, name, accname, accpassword
            FROM users
            WHERE accname = $1
            "#,
        )
        .bind(acc_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_account_name(&self, acc_name: &AccountName) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE accname = $1)")
                .bind(acc_name.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update_password(&self, user: &User) -> AuthResult<()> {
        if !user.password_changed() {
            return Ok(());
        }

        sqlx::query(
            r#"
            UPDATE users
            SET accpassword = $2,
                updated_at = NOW()
            WHERE userid = $1
            "#,
        )
        .bind(user.user_id.get())
        .bind(user.password().as_phc_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    userid: i64,
    name: String,
    accname: String,
    accpassword: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let name = DisplayName::new(&self.name)
            .map_err(|e| AuthError::Internal(format!("Invalid name: {}", e)))?;
        let acc_name = AccountName::new(&self.accname)
            .map_err(|e| AuthError::Internal(format!("Invalid accname: {}", e)))?;

        Ok(User::from_parts(
            UserId::new(self.userid),
            name,
            acc_name,
            UserPassword::from_phc_string(self.accpassword)?,
        ))
    }
}
