use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::auth::AuthContext;
use crate::domain::models::user::ROLE_ADMIN;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const AUTH_COOKIE: &str = "access_token";

/// Any authenticated caller. Rejects with 401 when the auth cookie is
/// missing or the token does not verify.
pub struct AuthUser(pub AuthContext);

/// An authenticated caller with the admin role; 403 otherwise.
pub struct AdminUser(pub AuthContext);

fn authenticate<S>(parts: &mut Parts, state: &S) -> Result<AuthContext, AppError>
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    let cookies = parts
        .extensions
        .get::<Cookies>()
        .ok_or(AppError::Internal)?;

    let access_token = cookies
        .get(AUTH_COOKIE)
        .ok_or(AppError::Unauthorized)?
        .value()
        .to_string();

    let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
    let claims = app_state.auth_service.verify_token(&access_token)?;
    let context = AuthContext::from(claims);

    Span::current().record("user_id", context.user_id.as_str());

    Ok(context)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).map(AuthUser)
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let context = authenticate(parts, state)?;
        if context.role != ROLE_ADMIN {
            return Err(AppError::Forbidden("Admin access required".into()));
        }
        Ok(AdminUser(context))
    }
}
