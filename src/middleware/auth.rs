// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::{common::error::AppError, config::AppState, models::auth::User};

// Extractor for handlers that require a caller. Pulls the bearer token from
// the Authorization header and resolves it to a user; anything missing or
// invalid rejects with 401 before the handler body runs. Public endpoints
// simply do not take this argument.
pub struct AuthenticatedUser(pub User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::InvalidToken)?;

        let user = app_state.auth_service.validate_token(token).await?;
        Ok(AuthenticatedUser(user))
    }
}
