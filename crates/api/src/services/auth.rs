//! Authentication service: registration, login and logout.
//!
//! Login mints an opaque session token and stores it on the user row
//! together with its expiry; both writes happen in one single-row UPDATE,
//! so a concurrent login by the same user resolves to last-write-wins and
//! at most one token stays valid.

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use thiserror::Error;

use domain::models::User;
use persistence::repositories::UserRepository;
use shared::password::{hash_password, verify_password, PasswordError};
use shared::token::generate_session_token;

use crate::config::SessionConfig;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already registered")]
    UsernameTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Authentication service.
pub struct AuthService {
    users: UserRepository,
    token_expiry_secs: i64,
}

impl AuthService {
    /// Creates a new AuthService over the given pool and session settings.
    pub fn new(pool: PgPool, session: &SessionConfig) -> Self {
        Self {
            users: UserRepository::new(pool),
            token_expiry_secs: session.token_expiry_secs,
        }
    }

    /// Register a new user account.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AuthError> {
        let password_hash = hash_password(password)?;

        let created = self.users.create_user(username, name, &password_hash).await;

        // Unique violation on the primary key means the username is taken,
        // including the race where two registrations interleave.
        if let Err(sqlx::Error::Database(db_err)) = &created {
            if db_err.code().as_deref() == Some("23505") {
                return Err(AuthError::UsernameTaken);
            }
        }
        let user = created?;

        tracing::info!(username = %user.username, "User registered");

        Ok(user.into())
    }

    /// Login with username and password, minting a new session token.
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller. A successful login overwrites any previous token.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = generate_session_token();
        let expires_at = Utc::now() + Duration::seconds(self.token_expiry_secs);

        self.users
            .set_session_token(&user.username, &token, expires_at)
            .await?;

        tracing::info!(username = %user.username, "Session token issued");

        Ok(SessionToken { token, expires_at })
    }

    /// Logout: clear the stored token and expiry.
    ///
    /// Idempotent — logging out an already logged-out user succeeds.
    pub async fn logout(&self, username: &str) -> Result<(), AuthError> {
        self.users.clear_session_token(username).await?;

        tracing::info!(username = %username, "Session cleared");

        Ok(())
    }
}
