use lib_core::model::Gym;
use lib_core::{Coordinate, GymRepository, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Gyms within check-in range of the caller, closest first.
pub struct FetchNearbyGymsService {
    gyms: Arc<dyn GymRepository>,
}

impl FetchNearbyGymsService {
    pub fn new(gyms: Arc<dyn GymRepository>) -> Self {
        Self { gyms }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user: Coordinate) -> Result<Vec<Gym>> {
        let gyms = self.gyms.find_many_nearby(user).await?;

        debug!("[GYMS] {} gyms nearby", gyms.len());

        Ok(gyms)
    }
}
