//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

const USER_COLUMNS: &str =
    "username, name, password_hash, token, token_expires_at, created_at, updated_at";

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a user by username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_username");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by their current session token.
    ///
    /// Expiry is intentionally not part of the predicate: the caller
    /// compares `token_expires_at` against the current time, and an expired
    /// row stays in place until the next login or an explicit logout.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_token");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE token = $1"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a new user account.
    ///
    /// A duplicate username surfaces as a database unique violation
    /// (code 23505) for the caller to translate.
    pub async fn create_user(
        &self,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (username, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username)
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a user's profile fields. `None` leaves a field unchanged.
    pub async fn update_profile(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_user_profile");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                password_hash = COALESCE($3, password_hash),
                updated_at = NOW()
            WHERE username = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username)
        .bind(name)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Store a freshly minted session token and its expiry.
    ///
    /// A single-row UPDATE, so the mint is atomic and silently replaces any
    /// previous token: one active session per user, last write wins.
    pub async fn set_session_token(
        &self,
        username: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("set_session_token");
        sqlx::query(
            r#"
            UPDATE users
            SET token = $2, token_expires_at = $3, updated_at = NOW()
            WHERE username = $1
            "#,
        )
        .bind(username)
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Clear the session token (logout). A no-op when no token is stored.
    pub async fn clear_session_token(&self, username: &str) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("clear_session_token");
        sqlx::query(
            r#"
            UPDATE users
            SET token = NULL, token_expires_at = NULL, updated_at = NOW()
            WHERE username = $1
            "#,
        )
        .bind(username)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Note: UserRepository tests require a database connection and are
    // covered by integration environments.
}
