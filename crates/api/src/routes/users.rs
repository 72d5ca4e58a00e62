//! User account routes: registration and profile management.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain::models::User;
use persistence::repositories::UserRepository;
use shared::password::hash_password;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::services::auth::AuthService;

/// Request body for user registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 100, message = "Password must be 1-100 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// User profile in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
        }
    }
}

/// Register a new user.
///
/// POST /api/v1/users/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    request.validate().map_err(ApiError::from)?;

    let auth_service = AuthService::new(state.pool.clone(), &state.config.session);

    let user = auth_service
        .register(&request.username, &request.password, &request.name)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Get the current user's profile.
///
/// GET /api/v1/users/me
pub async fn get_current_user(session: SessionUser) -> Json<UserResponse> {
    Json(session.user.into())
}

/// Request body for updating the current user's profile.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Password must be 1-100 characters"))]
    pub password: Option<String>,
}

/// Update the current user's name and/or password.
///
/// PATCH /api/v1/users/me
pub async fn update_current_user(
    State(state): State<AppState>,
    session: SessionUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    request.validate().map_err(ApiError::from)?;

    // A changed password is re-hashed; the plaintext never reaches the store.
    let password_hash = match request.password.as_deref() {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| ApiError::Internal(format!("Password error: {}", e)))?,
        ),
        None => None,
    };

    let repo = UserRepository::new(state.pool.clone());
    let updated = repo
        .update_profile(
            session.username(),
            request.name.as_deref(),
            password_hash.as_deref(),
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!(username = %updated.username, "Profile updated");

    Ok(Json(User::from(updated).into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            username: "jdoe".to_string(),
            password: "secret123".to_string(),
            name: "John Doe".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_empty_fields() {
        let request = RegisterRequest {
            username: String::new(),
            password: String::new(),
            name: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn test_register_request_overlong_username() {
        let request = RegisterRequest {
            username: "a".repeat(101),
            password: "secret123".to_string(),
            name: "John Doe".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let request = UpdateProfileRequest {
            name: None,
            password: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_blank_name() {
        let request = UpdateProfileRequest {
            name: Some(String::new()),
            password: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_from_user() {
        let user = User {
            username: "jdoe".to_string(),
            name: "John Doe".to_string(),
            password_hash: "hash".to_string(),
            token: None,
            token_expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = UserResponse::from(user);
        assert_eq!(response.username, "jdoe");
        assert_eq!(response.name, "John Doe");

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("hash"));
        assert!(!json.contains("token"));
    }
}
