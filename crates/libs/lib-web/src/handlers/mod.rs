//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature domain. Each one validates and coerces
//! its input, builds the matching service through
//! [`crate::services::factories`], and maps the result to a response.
//!
//! ## Handler Modules
//!
//! - **[`users`]**: registration, sessions and profile
//!   - `POST /users` - Register a member
//!   - `POST /sessions` - Authenticate, returns access token + refresh cookie
//!   - `PATCH /token/refresh` - Rotate tokens from the refresh cookie
//!   - `GET /me` - Authenticated user's profile
//!
//! - **[`gyms`]**: gym management and lookup
//!   - `POST /gyms` - Create gym (admin)
//!   - `GET /gyms/search` - Search by title
//!   - `GET /gyms/nearby` - Gyms within check-in range
//!
//! - **[`check_ins`]**: check-in workflow
//!   - `POST /gyms/{gym_id}/check-ins` - Check in
//!   - `GET /check-ins/history` - Paginated history
//!   - `GET /check-ins/metrics` - Check-in count
//!   - `PATCH /check-ins/{check_in_id}/validate` - Validate (admin)
//!
//! ## Error Handling
//!
//! Handlers return `Result<T, AppError>`; [`AppError`] renders the
//! `{ "message", "code" }` body and status code.

use lib_core::AppError;
use uuid::Uuid;

pub mod check_ins;
pub mod gyms;
pub mod users;

#[cfg(test)]
mod tests;

/// Ids travel as UUID strings; reject anything else before it reaches a service.
pub(crate) fn parse_id(raw: &str, field: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::Validation(format!("{} must be a valid UUID", field)))
}

/// Page of a paginated listing, 1 when absent.
pub(crate) fn page_or_default(page: Option<u32>) -> Result<u32, AppError> {
    let page = page.unwrap_or(1);
    lib_utils::validate_page(page).map_err(AppError::Validation)?;
    Ok(page)
}

/// Validated coordinate from untrusted input.
pub(crate) fn coordinate(latitude: f64, longitude: f64) -> Result<lib_core::Coordinate, AppError> {
    lib_core::Coordinate::try_new(latitude, longitude)
}
