//! # JWT Token Management
//!
//! Access and refresh token generation and validation.
//!
//! Both kinds carry the same claims; the `kind` claim keeps a refresh token
//! from being accepted where an access token is expected and vice versa.

use crate::error::{Error, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Which flow a token was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// JWT Claims structure containing user authentication information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User role (`ADMIN` or `MEMBER`)
    pub role: String,
    /// Access or refresh
    pub kind: TokenKind,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Encode a JWT token for `user_id` with the given role, lifetime and kind.
pub fn encode_jwt(
    user_id: &str,
    role: &str,
    kind: TokenKind,
    secret: &str,
    ttl: Duration,
) -> Result<String> {
    let now = Utc::now();
    let exp = now + ttl;

    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        kind,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::TokenEncode(e.to_string()))
}

/// Decode and validate a JWT token, requiring it to be of `expected` kind.
pub fn decode_jwt(token: &str, secret: &str, expected: TokenKind) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| Error::TokenDecode(e.to_string()))?;

    let claims = token_data.claims;
    if claims.kind != expected {
        return Err(Error::WrongTokenKind {
            expected: expected.as_str(),
            actual: claims.kind.as_str(),
        });
    }

    Ok(claims)
}
