//! # Authentication Data Transfer Objects
//!
//! Defines request and response structures for the user and session endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /users` - [`RegisterRequest`] -> `201 Created` (empty body)
//! - `POST /sessions` - [`AuthenticateRequest`] -> [`TokenResponse`] + `refreshToken` cookie
//! - `PATCH /token/refresh` - `refreshToken` cookie -> [`TokenResponse`] + rotated cookie
//! - `GET /me` - [`ProfileResponse`]
//!
//! ## Login Flow Example
//!
//! ```text
//! POST /sessions
//! Content-Type: application/json
//!
//! {
//!   "email": "johndoe@example.com",
//!   "password": "123456"
//! }
//! ```
//!
//! Response:
//! ```text
//! HTTP/1.1 200 OK
//! Set-Cookie: refreshToken=eyJ...; HttpOnly; SameSite=Strict; Secure; Path=/
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

use crate::model::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request for a new member account.
///
/// # Validation Rules (Server-Side)
///
/// - Name must not be blank
/// - Email must be a valid address and not already registered
/// - Password must be at least 6 characters
///
/// # Security Note
///
/// Password is sent in plaintext over HTTPS. Server immediately hashes it using Argon2.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Access token returned by login and refresh.
///
/// Include it in subsequent requests as:
/// ```text
/// Authorization: Bearer <token>
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// User information (public, safe to send to client).
///
/// Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Body of `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    pub user: UserProfile,
}
