//! User account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account. The username is immutable and doubles as the
/// primary key.
///
/// Session state is embedded in the record: `token` and `token_expires_at`
/// are either both present (a session was issued) or both absent. A token
/// is only usable while `now < token_expires_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)] // Never serialize credentials to API responses
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    #[serde(skip_serializing)]
    pub token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// True while a session token exists and has not reached its expiry.
    pub fn has_active_session(&self, now: DateTime<Utc>) -> bool {
        match (&self.token, self.token_expires_at) {
            (Some(_), Some(expires_at)) => now < expires_at,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_user() -> User {
        User {
            username: "jdoe".to_string(),
            name: "John Doe".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            token: None,
            token_expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_credentials_not_serialized() {
        let mut user = sample_user();
        user.token = Some("session-token-value".to_string());
        user.token_expires_at = Some(Utc::now());

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("$argon2id$secret"));
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains("session-token-value"));
        assert!(!json.contains("tokenExpiresAt"));
        assert!(json.contains("jdoe"));
    }

    #[test]
    fn test_no_session_without_token() {
        let user = sample_user();
        assert!(!user.has_active_session(Utc::now()));
    }

    #[test]
    fn test_active_session_before_expiry() {
        let now = Utc::now();
        let mut user = sample_user();
        user.token = Some("t".to_string());
        user.token_expires_at = Some(now + Duration::hours(1));
        assert!(user.has_active_session(now));
    }

    #[test]
    fn test_session_inactive_at_expiry() {
        let now = Utc::now();
        let mut user = sample_user();
        user.token = Some("t".to_string());
        user.token_expires_at = Some(now);
        // Expiry is exclusive: now >= expires_at means the session is gone.
        assert!(!user.has_active_session(now));
        assert!(!user.has_active_session(now + Duration::seconds(1)));
    }
}
