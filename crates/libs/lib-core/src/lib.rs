//! # Core Library
//!
//! Core models, repositories, configuration, and domain rules for the application.

pub mod clock;
pub mod config;
pub mod dto;
pub mod error;
pub mod geo;
pub mod model;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, RepositoryBackend};
pub use error::{AppError, Result};
pub use geo::{distance_between_coordinates, Coordinate, MAX_DISTANCE_KM};
pub use model::store::{
    create_pool, ensure_database_dir, CheckInRepository, DbPool, GymRepository, InMemoryCheckInRepository,
    InMemoryGymRepository, InMemoryUserRepository, SqliteCheckInRepository, SqliteGymRepository,
    SqliteUserRepository, UserRepository, MIGRATOR, PAGE_SIZE,
};
