//! # Auth Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    #[error("Failed to parse hash: {0}")]
    InvalidHash(String),

    #[error("Failed to encode JWT: {0}")]
    TokenEncode(String),

    #[error("Failed to decode JWT: {0}")]
    TokenDecode(String),

    #[error("Expected a {expected} token, got a {actual} token")]
    WrongTokenKind { expected: &'static str, actual: &'static str },
}
