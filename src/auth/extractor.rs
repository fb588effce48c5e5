use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::token;
use crate::error::AppError;
use crate::models::User;
use crate::state::SharedState;

/// Authenticated requester, resolved from the `Authorization: Bearer` header
/// by looking the token up in the store. No ambient auth context: handlers
/// only ever see the user this extractor produced.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let value = header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let bearer = value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let user = token::resolve(&state.pool, bearer).await?;
        Ok(AuthUser { user })
    }
}
