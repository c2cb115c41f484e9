//! # User Handlers
//!
//! Registration, session creation, token refresh and profile lookup.
//!
//! Sessions hand out two JWTs: a short-lived access token in the response
//! body and a long-lived refresh token in the `refreshToken` cookie
//! (HttpOnly, Secure, SameSite=Strict, Path=/). `PATCH /token/refresh` trades
//! a valid refresh cookie for a new pair.

use crate::server::AppState;
use crate::services::{
    make_authenticate_service, make_get_user_profile_service, make_register_service,
    AuthenticateInput, RegisterInput,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    Extension,
};
use lib_auth::{decode_jwt, encode_jwt, Claims, TokenKind, MIN_PASSWORD_LENGTH};
use lib_core::dto::{AuthenticateRequest, ProfileResponse, RegisterRequest, TokenResponse};
use lib_core::{AppError, Config};
use lib_utils::{validate_email, validate_min_length, validate_not_empty};
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::{debug, info, instrument, warn};

/// Name of the cookie holding the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

// region: --- Token helpers

fn issue_tokens(config: &Config, user_id: &str, role: &str) -> Result<(String, String), AppError> {
    let encode = |kind, ttl| {
        encode_jwt(user_id, role, kind, &config.jwt_secret, ttl)
            .map_err(|e| AppError::Internal(e.to_string()))
    };

    let access = encode(TokenKind::Access, config.access_token_ttl())?;
    let refresh = encode(TokenKind::Refresh, config.refresh_token_ttl())?;

    Ok((access, refresh))
}

fn refresh_cookie(token: String) -> Cookie<'static> {
    Cookie::build((REFRESH_TOKEN_COOKIE, token))
        .path("/")
        .secure(true)
        .same_site(SameSite::Strict)
        .http_only(true)
        .build()
}

// endregion: --- Token helpers

/// `POST /users` - register a member account.
///
/// # Validation
///
/// - Name must not be blank
/// - Email must look like an email
/// - Password must be at least 6 characters
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<StatusCode, AppError> {
    info!("[REGISTER] New registration request");

    validate_not_empty(&req.name, "name").map_err(AppError::Validation)?;
    validate_email(&req.email).map_err(AppError::Validation)?;
    validate_min_length(&req.password, MIN_PASSWORD_LENGTH, "password")
        .map_err(AppError::Validation)?;

    make_register_service(&state)
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(StatusCode::CREATED)
}

/// `POST /sessions` - log in with email and password.
#[instrument(skip(state, cookies, req), fields(email = %req.email))]
pub async fn authenticate(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(req): Json<AuthenticateRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    validate_email(&req.email).map_err(AppError::Validation)?;
    validate_min_length(&req.password, MIN_PASSWORD_LENGTH, "password")
        .map_err(AppError::Validation)?;

    let user = make_authenticate_service(&state)
        .execute(AuthenticateInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let (token, refresh) = issue_tokens(&state.config, &user.id, user.role.as_str())?;
    cookies.add(refresh_cookie(refresh));

    info!("[AUTH] Session created for user {}", user.id);

    Ok(Json(TokenResponse { token }))
}

/// `PATCH /token/refresh` - new token pair from the refresh cookie.
#[instrument(skip(state, cookies))]
pub async fn refresh(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Json<TokenResponse>, AppError> {
    let cookie = cookies.get(REFRESH_TOKEN_COOKIE).ok_or_else(|| {
        warn!("[AUTH] Refresh without cookie");
        AppError::Unauthorized("Unauthorized.".to_string())
    })?;

    let claims = decode_jwt(cookie.value(), &state.config.jwt_secret, TokenKind::Refresh)
        .map_err(|e| {
            warn!("[AUTH] Refresh token rejected: {}", e);
            AppError::Unauthorized("Unauthorized.".to_string())
        })?;

    let (token, refresh) = issue_tokens(&state.config, &claims.sub, &claims.role)?;
    cookies.add(refresh_cookie(refresh));

    debug!("[AUTH] Tokens refreshed for user {}", claims.sub);

    Ok(Json(TokenResponse { token }))
}

/// `GET /me` - profile of the authenticated user.
#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = make_get_user_profile_service(&state)
        .execute(&claims.sub)
        .await?;

    Ok(Json(ProfileResponse { user: user.into() }))
}
