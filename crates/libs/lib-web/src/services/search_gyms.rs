use lib_core::model::Gym;
use lib_core::{GymRepository, Result};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct SearchGymsInput {
    pub query: String,
    /// 1-indexed.
    pub page: u32,
}

/// Title search, one page at a time.
pub struct SearchGymsService {
    gyms: Arc<dyn GymRepository>,
}

impl SearchGymsService {
    pub fn new(gyms: Arc<dyn GymRepository>) -> Self {
        Self { gyms }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, input: SearchGymsInput) -> Result<Vec<Gym>> {
        self.gyms.search_many(&input.query, input.page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_utils::gym_at;
    use lib_core::InMemoryGymRepository;

    async fn service_with_gyms() -> SearchGymsService {
        let repo = Arc::new(InMemoryGymRepository::new());
        for i in 1..=22 {
            repo.create(gym_at(&format!("JavaScript Gym {i}"), -27.2092052, -49.6401091))
                .await
                .unwrap();
        }
        repo.create(gym_at("TypeScript Gym", -27.2092052, -49.6401091)).await.unwrap();
        SearchGymsService::new(repo)
    }

    #[tokio::test]
    async fn test_search_gyms() {
        let service = service_with_gyms().await;

        let gyms = service
            .execute(SearchGymsInput { query: "TypeScript".to_string(), page: 1 })
            .await
            .unwrap();

        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].title, "TypeScript Gym");
    }

    #[tokio::test]
    async fn test_search_gyms_paginated() {
        let service = service_with_gyms().await;

        let first = service
            .execute(SearchGymsInput { query: "JavaScript".to_string(), page: 1 })
            .await
            .unwrap();
        let second = service
            .execute(SearchGymsInput { query: "JavaScript".to_string(), page: 2 })
            .await
            .unwrap();

        assert_eq!(first.len(), 20);
        let titles: Vec<_> = second.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["JavaScript Gym 21", "JavaScript Gym 22"]);
    }
}
