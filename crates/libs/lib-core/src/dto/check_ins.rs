//! # Check-in Data Transfer Objects

use crate::model::CheckIn;
use serde::{Deserialize, Serialize};

/// Body of `POST /gyms/{gym_id}/check-ins`: where the member stands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CreateCheckInRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// `?page=` of the paginated listings. Defaults to 1.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInResponse {
    pub check_in: CheckIn,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInsResponse {
    pub check_ins: Vec<CheckIn>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsResponse {
    pub check_ins_count: u64,
}
