use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::extractors::auth::AUTH_COOKIE;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use time::Duration;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.is_empty() || !payload.email.contains('@') {
        return Err(AppError::Validation("A valid email is required".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }
    if payload.full_name.is_empty() {
        return Err(AppError::Validation("Full name is required".into()));
    }

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("User with this email already exists".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;
    let user = User::new(payload.email, password_hash, payload.full_name, payload.phone);
    let created = state.user_repo.create(&user).await?;

    // Auto-login after registration, as the booking flow expects.
    let token = state.auth_service.issue_token(&created)?;
    set_auth_cookie(&cookies, &token);

    info!("Registered user: {}", created.id);

    Ok(Json(serde_json::json!({
        "user_id": created.id,
        "token": token,
    })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = authenticate(&state, &payload).await?;

    let token = state.auth_service.issue_token(&user)?;
    set_auth_cookie(&cookies, &token);

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = authenticate(&state, &payload).await?;

    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".into()));
    }

    let token = state.auth_service.issue_token(&user)?;
    set_auth_cookie(&cookies, &token);

    info!("Admin logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

pub async fn logout(cookies: Cookies) -> Result<impl IntoResponse, AppError> {
    cookies.remove(Cookie::build((AUTH_COOKIE, "")).path("/").into());

    info!("User logged out");

    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn check_auth(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(context): MaybeAuthUser,
) -> Result<impl IntoResponse, AppError> {
    let Some(context) = context else {
        return Ok(Json(serde_json::json!({ "authenticated": false })));
    };

    match state.user_repo.find_by_id(&context.user_id).await? {
        Some(user) => Ok(Json(serde_json::json!({
            "authenticated": true,
            "user": UserProfile::from(&user),
        }))),
        None => Ok(Json(serde_json::json!({ "authenticated": false }))),
    }
}

async fn authenticate(state: &AppState, payload: &LoginRequest) -> Result<User, AppError> {
    let user = state
        .user_repo
        .find_by_email(&payload.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    state
        .auth_service
        .verify_password(&payload.password, &user.password_hash)?;

    Ok(user)
}

fn set_auth_cookie(cookies: &Cookies, token: &str) {
    let mut cookie = Cookie::new(AUTH_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(24));
    cookies.add(cookie);
}
