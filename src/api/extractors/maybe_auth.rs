use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::api::extractors::auth::AUTH_COOKIE;
use crate::domain::models::auth::AuthContext;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;

/// Like `AuthUser` but treats a missing or invalid token as a guest
/// instead of rejecting.
pub struct MaybeAuthUser(pub Option<AuthContext>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(cookies) = parts.extensions.get::<Cookies>() else {
            return Ok(MaybeAuthUser(None));
        };

        let access_token = match cookies.get(AUTH_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => return Ok(MaybeAuthUser(None)),
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        match app_state.auth_service.verify_token(&access_token) {
            Ok(claims) => Ok(MaybeAuthUser(Some(AuthContext::from(claims)))),
            // Invalid token (expired, bad signature) -> treat as guest
            Err(_) => Ok(MaybeAuthUser(None)),
        }
    }
}
