//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used consistently
//! across repositories, services and handlers. It follows the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Business-rule violations** - raised by services, never by repositories
//!    - [`ResourceNotFound`](AppError::ResourceNotFound) → 404 Not Found
//!    - [`MaxDistance`](AppError::MaxDistance) → 400 Bad Request
//!    - [`MaxNumberOfCheckIns`](AppError::MaxNumberOfCheckIns) → 409 Conflict
//!    - [`LateCheckInValidate`](AppError::LateCheckInValidate) → 400 Bad Request
//!    - [`CheckInAlreadyValidated`](AppError::CheckInAlreadyValidated) → 409 Conflict
//!    - [`UserAlreadyExists`](AppError::UserAlreadyExists) → 409 Conflict
//!    - [`InvalidCredentials`](AppError::InvalidCredentials) → 400 Bad Request
//!
//! 2. **Client Errors** - caught before a service runs
//!    - [`Validation`](AppError::Validation) → 400 Bad Request
//!    - [`Unauthorized`](AppError::Unauthorized) → 401 Unauthorized
//!
//! 3. **Storage / Server Errors**
//!    - [`Conflict`](AppError::Conflict) → 409 Conflict (uniqueness violation)
//!    - [`Database`](AppError::Database) → 500 Internal Server Error
//!    - [`Config`](AppError::Config) / [`Internal`](AppError::Internal) → 500
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_page(page: u32) -> Result<u32> {
//!     if page == 0 {
//!         return Err(AppError::Validation("page must be at least 1".to_string()));
//!     }
//!     Ok(page)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `From<sqlx::Error>` - unique violations become [`Conflict`](AppError::Conflict),
//!   everything else [`Database`](AppError::Database)
//! - `From<anyhow::Error>` / `From<serde_json::Error>` - become internal errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    /// An entity looked up by id does not exist.
    #[error("Resource not found.")]
    ResourceNotFound,

    /// The user is farther from the gym than the check-in geofence allows.
    #[error("Max distance reached.")]
    MaxDistance,

    /// The user already checked in on this calendar day.
    #[error("Max number of check-ins reached.")]
    MaxNumberOfCheckIns,

    /// The validation window after check-in creation has elapsed.
    #[error("The check-in can only be validated until 20 minutes of its creation.")]
    LateCheckInValidate,

    /// The check-in was validated before.
    #[error("Check-in has already been validated.")]
    CheckInAlreadyValidated,

    /// Registration with an email that is already taken.
    #[error("E-mail already exists.")]
    UserAlreadyExists,

    /// Unknown email or wrong password.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Malformed input caught before reaching a service.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing, invalid or insufficiently privileged credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Storage uniqueness constraint violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other storage failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ResourceNotFound => StatusCode::NOT_FOUND,
            AppError::MaxDistance
            | AppError::LateCheckInValidate
            | AppError::InvalidCredentials
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MaxNumberOfCheckIns
            | AppError::CheckInAlreadyValidated
            | AppError::UserAlreadyExists
            | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ResourceNotFound => "ResourceNotFound",
            AppError::MaxDistance => "MaxDistance",
            AppError::MaxNumberOfCheckIns => "MaxNumberOfCheckIns",
            AppError::LateCheckInValidate => "LateCheckInValidate",
            AppError::CheckInAlreadyValidated => "CheckInAlreadyValidated",
            AppError::UserAlreadyExists => "UserAlreadyExists",
            AppError::InvalidCredentials => "InvalidCredentials",
            AppError::Validation(_) => "Validation",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Conflict(_) => "Conflict",
            AppError::Database(_) => "Database",
            AppError::Config(_) => "Config",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => format!("Validation error: {}", msg),
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::Conflict(_) => "Resource already exists.".to_string(),
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                "Internal server error.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "message": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}
