//! # Gym Data Transfer Objects
//!
//! - `POST /gyms` - [`CreateGymRequest`] -> [`GymResponse`]
//! - `GET /gyms/search?q=&page=` - [`SearchGymsQuery`] -> [`GymsResponse`]
//! - `GET /gyms/nearby?latitude=&longitude=` - [`NearbyGymsQuery`] -> [`GymsResponse`]

use crate::model::Gym;
use serde::{Deserialize, Serialize};

/// Body of `POST /gyms`.
///
/// # JSON Example
///
/// ```json
/// {
///   "title": "JavaScript Gym",
///   "description": "Some description.",
///   "phone": "1199999999",
///   "latitude": -27.2092052,
///   "longitude": -49.6401091
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateGymRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Query of `GET /gyms/search`. `page` defaults to 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchGymsQuery {
    pub q: String,
    pub page: Option<u32>,
}

/// Query of `GET /gyms/nearby`: the caller's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NearbyGymsQuery {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GymResponse {
    pub gym: Gym,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GymsResponse {
    pub gyms: Vec<Gym>,
}
