//! # Model Layer
//!
//! Entities and their persistence.

pub mod store;

pub use store::models::{CheckIn, CheckInForCreate, Gym, GymForCreate, Role, User, UserForCreate};
