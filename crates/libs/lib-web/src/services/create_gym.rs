use lib_core::model::{Gym, GymForCreate};
use lib_core::{GymRepository, Result};
use std::sync::Arc;
use tracing::{info, instrument};

/// Registers a gym. Titles need not be unique.
pub struct CreateGymService {
    gyms: Arc<dyn GymRepository>,
}

impl CreateGymService {
    pub fn new(gyms: Arc<dyn GymRepository>) -> Self {
        Self { gyms }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn execute(&self, input: GymForCreate) -> Result<Gym> {
        let gym = self.gyms.create(input).await?;

        info!("[GYMS] Gym created: {}", gym.id);

        Ok(gym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_utils::gym_at;
    use lib_core::{AppError, InMemoryGymRepository};

    #[tokio::test]
    async fn test_create_gym() {
        let service = CreateGymService::new(Arc::new(InMemoryGymRepository::new()));

        let gym = service
            .execute(gym_at("JavaScript Gym", -27.2092052, -49.6401091))
            .await
            .unwrap();

        assert_eq!(gym.title, "JavaScript Gym");
        assert!(!gym.id.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_titles_allowed() {
        let service = CreateGymService::new(Arc::new(InMemoryGymRepository::new()));

        let first = service.execute(gym_at("JavaScript Gym", 0.0, 0.0)).await.unwrap();
        let second = service.execute(gym_at("JavaScript Gym", 0.0, 0.0)).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_invalid_coordinates() {
        let service = CreateGymService::new(Arc::new(InMemoryGymRepository::new()));

        let result = service.execute(gym_at("JavaScript Gym", -91.0, 0.0)).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
