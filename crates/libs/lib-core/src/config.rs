//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The loaded [`Config`] is carried in the web layer's `AppState` and handed to
//! whatever needs it; nothing reads configuration through a global.

use chrono::{Duration, FixedOffset, Offset, Utc};
use lib_utils::{get_env, get_env_or, get_env_parse_or, offset_from_minutes};
use std::str::FromStr;

/// Which repository implementation the server wires into its services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepositoryBackend {
    /// SQLite through sqlx (default).
    Sqlite,
    /// Process-local vectors; data is lost on restart.
    Memory,
}

impl FromStr for RepositoryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(RepositoryBackend::Sqlite),
            "memory" | "in-memory" => Ok(RepositoryBackend::Memory),
            other => Err(format!("REPOSITORY_BACKEND must be 'sqlite' or 'memory', got '{}'", other)),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification
    ///
    /// **Must be at least 32 characters long** for security.
    pub jwt_secret: String,

    /// Access token validity period in minutes (1-1440)
    pub jwt_access_expiration_minutes: i64,

    /// Refresh token validity period in days (1-90)
    pub jwt_refresh_expiration_days: i64,

    /// Offset from UTC, in minutes, of the calendar used for the
    /// one-check-in-per-day rule.
    pub check_in_utc_offset_minutes: i32,

    /// Repository implementation selected at startup
    pub repository_backend: RepositoryBackend,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = get_env_or("DATABASE_URL", "sqlite:data/gympass.db");

        let jwt_secret = get_env("JWT_SECRET").map_err(|e| e.to_string())?;

        let jwt_access_expiration_minutes = get_env_parse_or("JWT_ACCESS_EXPIRATION_MINUTES", 10)
            .map_err(|e| format!("JWT_ACCESS_EXPIRATION_MINUTES must be a valid number: {}", e))?;

        let jwt_refresh_expiration_days = get_env_parse_or("JWT_REFRESH_EXPIRATION_DAYS", 7)
            .map_err(|e| format!("JWT_REFRESH_EXPIRATION_DAYS must be a valid number: {}", e))?;

        let check_in_utc_offset_minutes = get_env_parse_or("CHECK_IN_UTC_OFFSET_MINUTES", 0)
            .map_err(|e| format!("CHECK_IN_UTC_OFFSET_MINUTES must be a valid number: {}", e))?;

        let repository_backend = get_env_or("REPOSITORY_BACKEND", "sqlite").parse()?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_access_expiration_minutes,
            jwt_refresh_expiration_days,
            check_in_utc_offset_minutes,
            repository_backend,
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if !(1..=1440).contains(&self.jwt_access_expiration_minutes) {
            return Err("JWT_ACCESS_EXPIRATION_MINUTES must be between 1 and 1440 (1 day)".to_string());
        }

        if !(1..=90).contains(&self.jwt_refresh_expiration_days) {
            return Err("JWT_REFRESH_EXPIRATION_DAYS must be between 1 and 90".to_string());
        }

        if self.check_in_utc_offset_minutes.abs() > 14 * 60 {
            return Err("CHECK_IN_UTC_OFFSET_MINUTES must be within +/- 840 (14 hours)".to_string());
        }

        Ok(())
    }

    /// Lifetime of an access token.
    pub fn access_token_ttl(&self) -> Duration {
        Duration::minutes(self.jwt_access_expiration_minutes)
    }

    /// Lifetime of a refresh token.
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::days(self.jwt_refresh_expiration_days)
    }

    /// Offset whose calendar defines "the same day" for check-ins.
    ///
    /// Falls back to UTC if the configured value was never validated.
    pub fn check_in_offset(&self) -> FixedOffset {
        offset_from_minutes(self.check_in_utc_offset_minutes).unwrap_or_else(|_| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
            jwt_access_expiration_minutes: 10,
            jwt_refresh_expiration_days: 7,
            check_in_utc_offset_minutes: -180,
            repository_backend: RepositoryBackend::Sqlite,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = config();
        assert!(config.validate().is_ok());
        assert_eq!(config.access_token_ttl(), Duration::minutes(10));
        assert_eq!(config.check_in_offset().local_minus_utc(), -180 * 60);
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = Config { jwt_secret: "short".to_string(), ..config() };
        assert_eq!(
            config.validate(),
            Err("JWT_SECRET must be at least 32 characters long".to_string())
        );
    }

    #[test]
    fn test_offset_out_of_range_rejected() {
        let config = Config { check_in_utc_offset_minutes: 15 * 60, ..config() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_repository_backend_parse() {
        assert_eq!("SQLITE".parse::<RepositoryBackend>(), Ok(RepositoryBackend::Sqlite));
        assert_eq!("memory".parse::<RepositoryBackend>(), Ok(RepositoryBackend::Memory));
        assert!("postgres".parse::<RepositoryBackend>().is_err());
    }
}
