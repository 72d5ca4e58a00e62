//! Authentication routes: login and logout.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::services::auth::AuthService;

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, max = 100, message = "Password is required"))]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Expiry as milliseconds since the Unix epoch.
    pub expires_at: i64,
}

/// Login with username and password.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    let auth_service = AuthService::new(state.pool.clone(), &state.config.session);

    let session = auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(TokenResponse {
        token: session.token,
        expires_at: session.expires_at.timestamp_millis(),
    }))
}

/// Logout the current session.
///
/// DELETE /api/v1/auth/logout
///
/// Requires authentication; idempotent once authenticated.
pub async fn logout(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<StatusCode, ApiError> {
    let auth_service = AuthService::new(state.pool.clone(), &state.config.session);

    auth_service.logout(session.username()).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_valid() {
        let request = LoginRequest {
            username: "jdoe".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_empty_username() {
        let request = LoginRequest {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_empty_password() {
        let request = LoginRequest {
            username: "jdoe".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_token_response_wire_format() {
        let response = TokenResponse {
            token: "deadbeef".to_string(),
            expires_at: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""token":"deadbeef""#));
        assert!(json.contains(r#""expiresAt":1700000000000"#));
    }
}
