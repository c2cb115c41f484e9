//! # Check-in Service
//!
//! A member checks in at a gym. The rules run in order and the first failing
//! one decides the error:
//!
//! 1. the gym exists ([`AppError::ResourceNotFound`])
//! 2. the member stands within [`MAX_DISTANCE_KM`] of it ([`AppError::MaxDistance`])
//! 3. the member has no check-in yet today ([`AppError::MaxNumberOfCheckIns`])
//!
//! "Today" is the calendar day of the clock's current instant in the
//! configured check-in offset.

use chrono::FixedOffset;
use lib_core::model::{CheckIn, CheckInForCreate};
use lib_core::{
    distance_between_coordinates, AppError, CheckInRepository, Clock, Coordinate, GymRepository,
    Result, MAX_DISTANCE_KM,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct CheckInInput {
    pub user_id: String,
    pub gym_id: String,
    pub user_latitude: f64,
    pub user_longitude: f64,
}

pub struct CheckInService {
    check_ins: Arc<dyn CheckInRepository>,
    gyms: Arc<dyn GymRepository>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl CheckInService {
    pub fn new(
        check_ins: Arc<dyn CheckInRepository>,
        gyms: Arc<dyn GymRepository>,
        clock: Arc<dyn Clock>,
        offset: FixedOffset,
    ) -> Self {
        Self {
            check_ins,
            gyms,
            clock,
            offset,
        }
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, gym_id = %input.gym_id))]
    pub async fn execute(&self, input: CheckInInput) -> Result<CheckIn> {
        let gym = self
            .gyms
            .find_by_id(&input.gym_id)
            .await?
            .ok_or(AppError::ResourceNotFound)?;

        let user = Coordinate {
            latitude: input.user_latitude,
            longitude: input.user_longitude,
        };
        let distance = distance_between_coordinates(user, gym.coordinate());

        if distance > MAX_DISTANCE_KM {
            warn!("[CHECK-IN] Too far from gym: {:.3} km", distance);
            return Err(AppError::MaxDistance);
        }

        let now = self.clock.now().with_timezone(&self.offset);

        let same_day = self
            .check_ins
            .find_by_user_id_on_date(&input.user_id, now)
            .await?;
        if same_day.is_some() {
            warn!("[CHECK-IN] Already checked in on {}", now.date_naive());
            return Err(AppError::MaxNumberOfCheckIns);
        }

        let check_in = self
            .check_ins
            .create(CheckInForCreate {
                gym_id: input.gym_id,
                user_id: input.user_id,
                created_at: now,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => AppError::MaxNumberOfCheckIns,
                other => other,
            })?;

        info!("[CHECK-IN] Check-in created: {}", check_in.id);

        Ok(check_in)
    }
}
