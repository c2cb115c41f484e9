//! # Utilities Library
//!
//! Shared utility functions for environment variables, time, and validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_or};
pub use time::{day_bounds, local_day, now_utc, offset_from_minutes};
pub use validation::{
    validate_email, validate_latitude, validate_longitude, validate_min_length,
    validate_not_empty, validate_page,
};
