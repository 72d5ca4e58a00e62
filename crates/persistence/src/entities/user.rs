//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the users table.
///
/// `token` and `token_expires_at` are kept in lockstep by a table CHECK
/// constraint: both set while a session exists, both NULL otherwise.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub token: Option<String>,
    pub token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            password_hash: entity.password_hash,
            token: entity.token,
            token_expires_at: entity.token_expires_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
