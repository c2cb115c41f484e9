//! # Authentication Middleware
//!
//! Axum middleware for JWT access token validation and role verification.
//!
//! [`require_auth`] extracts and validates the access token from the
//! `Authorization: Bearer <token>` header, then injects the [`Claims`] into the
//! request extensions. [`require_admin`] runs after it and rejects every
//! caller whose `role` claim is not `ADMIN`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{middleware, routing::{get, post}, Router};
//! use lib_web::middleware::{require_admin, require_auth};
//!
//! let admin = Router::new()
//!     .route("/gyms", post(create))
//!     .route_layer(middleware::from_fn(require_admin));
//!
//! let app = Router::new()
//!     .route("/me", get(profile))
//!     .merge(admin)
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```
//!
//! Handlers can then extract claims using `Extension<Claims>`:
//!
//! ```rust,ignore
//! async fn profile(Extension(claims): Extension<Claims>) -> String {
//!     format!("Hello, user {}!", claims.sub)
//! }
//! ```

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::{decode_jwt, Claims, TokenKind};
use lib_core::model::Role;
use lib_core::{AppError, Config};
use tracing::{debug, warn};

/// Body message of a role check failure.
pub const ROLE_DENIED_MESSAGE: &str =
    "Your role does not have the necessary privileges to perform this action.";

/// Authentication middleware that validates access tokens.
///
/// # Behavior
///
/// - **Valid access token**: Continues with `Claims` in extensions
/// - **Missing/invalid/expired token, or a refresh token**: `401 Unauthorized`
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            warn!("[AUTH] Missing or malformed Authorization header");
            AppError::Unauthorized("Unauthorized.".to_string())
        })?;

    let claims = decode_jwt(token, &config.jwt_secret, TokenKind::Access).map_err(|e| {
        warn!("[AUTH] JWT validation failed: {}", e);
        AppError::Unauthorized("Unauthorized.".to_string())
    })?;

    debug!("[AUTH] Authenticated user: {} ({})", claims.sub, claims.role);

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Role verification middleware. Must run inside [`require_auth`].
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let role = req
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.role.as_str());

    if role != Some(Role::Admin.as_str()) {
        warn!("[AUTH] Role check failed: {:?}", role);
        return Err(AppError::Unauthorized(ROLE_DENIED_MESSAGE.to_string()));
    }

    Ok(next.run(req).await)
}
