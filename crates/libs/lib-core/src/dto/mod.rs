//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies of the REST API. All field names are
//! snake_case on the wire (default serde behavior).

pub mod auth;
pub mod check_ins;
pub mod gyms;

pub use auth::*;
pub use check_ins::*;
pub use gyms::*;
