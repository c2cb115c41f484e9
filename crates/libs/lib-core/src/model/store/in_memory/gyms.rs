use super::paginate;
use crate::error::Result;
use crate::geo::Coordinate;
use crate::model::store::gym_repository::{nearest_within_range, search_key, GymRepository};
use crate::model::store::models::{Gym, GymForCreate};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryGymRepository {
    items: RwLock<Vec<Gym>>,
}

impl InMemoryGymRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GymRepository for InMemoryGymRepository {
    async fn create(&self, data: GymForCreate) -> Result<Gym> {
        Coordinate::try_new(data.latitude, data.longitude)?;

        let gym = Gym {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            description: data.description,
            phone: data.phone,
            latitude: data.latitude,
            longitude: data.longitude,
            created_at: Utc::now(),
        };
        self.items.write().await.push(gym.clone());

        Ok(gym)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|g| g.id == id).cloned())
    }

    async fn find_many_nearby(&self, point: Coordinate) -> Result<Vec<Gym>> {
        let items = self.items.read().await;
        Ok(nearest_within_range(point, items.clone()))
    }

    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>> {
        let query = search_key(query);
        let items = self.items.read().await;

        let matches = items
            .iter()
            .filter(|g| search_key(&g.title).contains(&query))
            .cloned();

        Ok(paginate(matches, page))
    }
}
