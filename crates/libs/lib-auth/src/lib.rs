//! # Authentication Library
//!
//! Password hashing and JWT access/refresh token management.

pub mod error;
pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pwd::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
pub use token::{decode_jwt, encode_jwt, Claims, TokenKind};
