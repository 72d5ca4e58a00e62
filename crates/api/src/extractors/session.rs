//! Session token extractor.
//!
//! Resolves the bearer token carried by a request to the owning user, or
//! rejects the request. Every protected route takes [`SessionUser`] as an
//! argument, so authorization is a precondition checked before the handler
//! body runs.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::Utc;

use domain::models::User;
use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// The authenticated principal for the current request.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user: User,
}

impl SessionUser {
    /// Username of the authenticated principal.
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A missing or malformed Authorization header is reported exactly
        // like an unknown token.
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| unauthorized())?;

        let repo = UserRepository::new(state.pool.clone());
        let user = repo
            .find_by_token(bearer.token())
            .await
            .map_err(ApiError::from)?
            .ok_or_else(unauthorized)?;

        // Lazy expiry: an expired token is rejected here but the stored row
        // is left untouched until the next login or an explicit logout.
        match user.token_expires_at {
            Some(expires_at) if Utc::now() < expires_at => Ok(SessionUser { user: user.into() }),
            _ => Err(unauthorized()),
        }
    }
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Unauthorized".to_string())
}
