use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{
    auth::{
        jwt::{JwtKeys, TokenError},
        repo_types::{Role, User},
    },
    error::ApiError,
    state::AppState,
};

/// Resolves the bearer token to the acting user.
///
/// Verifies the JWT and re-looks-up the user by the token subject, so a
/// token whose user has disappeared is rejected like any other bad token.
pub struct AuthUser(pub User);

/// Like [`AuthUser`], but additionally requires the admin role.
pub struct AdminUser(pub User);

pub(crate) fn require_admin(user: &User) -> Result<(), ApiError> {
    if user.role() != Role::Admin {
        return Err(ApiError::Forbidden("Admin access required".into()));
    }
    Ok(())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            match e {
                TokenError::Expired => ApiError::Unauthorized("Token expired".into()),
                TokenError::Invalid => ApiError::Unauthorized("Invalid token".into()),
            }
        })?;

        let user = User::find_by_username(&state.db, &claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(username = %claims.sub, "token subject no longer exists");
                ApiError::Unauthorized("Invalid token".into())
            })?;

        Ok(AuthUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        require_admin(&user)?;
        Ok(AdminUser(user))
    }
}
