//! # Gym Repository
//!
//! Gym persistence, text search and proximity lookup.

use super::models::{Gym, GymForCreate};
use super::{page_offset, DbPool, PAGE_SIZE};
use crate::error::Result;
use crate::geo::{BoundingBox, Coordinate, MAX_DISTANCE_KM};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::query_as;
use uuid::Uuid;

/// Storage contract for gyms.
#[async_trait]
pub trait GymRepository: Send + Sync {
    /// Insert a gym. Out-of-range coordinates fail with
    /// [`AppError::Validation`](crate::AppError::Validation).
    async fn create(&self, data: GymForCreate) -> Result<Gym>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>>;

    /// Gyms within [`MAX_DISTANCE_KM`] (inclusive) of `point`, closest first.
    /// Gyms at the same distance keep creation order.
    async fn find_many_nearby(&self, point: Coordinate) -> Result<Vec<Gym>>;

    /// Case-insensitive substring match on the title, [`PAGE_SIZE`] per
    /// 1-indexed page, in creation order.
    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>>;
}

/// Keep the gyms within the geofence of `point` and sort them by distance.
///
/// The sort is stable, so equal distances keep the incoming order.
pub(crate) fn nearest_within_range(point: Coordinate, gyms: Vec<Gym>) -> Vec<Gym> {
    let mut in_range: Vec<(f64, Gym)> = gyms
        .into_iter()
        .map(|gym| (point.distance_to(&gym.coordinate()), gym))
        .filter(|(distance, _)| *distance <= MAX_DISTANCE_KM)
        .collect();

    in_range.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    in_range.into_iter().map(|(_, gym)| gym).collect()
}

/// Case-folded form of a title or query used for title search.
pub(crate) fn search_key(text: &str) -> String {
    text.to_lowercase()
}

/// SQLite implementation of [`GymRepository`].
#[derive(Clone, Debug)]
pub struct SqliteGymRepository {
    pool: DbPool,
}

impl SqliteGymRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for SqliteGymRepository {
    async fn create(&self, data: GymForCreate) -> Result<Gym> {
        Coordinate::try_new(data.latitude, data.longitude)?;

        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO gyms (id, title, title_search, description, phone, latitude, longitude, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&data.title)
        .bind(search_key(&data.title))
        .bind(&data.description)
        .bind(&data.phone)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let gym = query_as::<_, Gym>("SELECT * FROM gyms WHERE id = ?")
            .bind(&id)
            .fetch_one(&self.pool)
            .await?;

        Ok(gym)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>> {
        let gym = query_as::<_, Gym>("SELECT * FROM gyms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(gym)
    }

    async fn find_many_nearby(&self, point: Coordinate) -> Result<Vec<Gym>> {
        let bbox = BoundingBox::around(point, MAX_DISTANCE_KM);

        let candidates = query_as::<_, Gym>(
            r#"
            SELECT * FROM gyms
            WHERE latitude BETWEEN ? AND ?
              AND longitude BETWEEN ? AND ?
            ORDER BY rowid
            "#,
        )
        .bind(bbox.min_latitude)
        .bind(bbox.max_latitude)
        .bind(bbox.min_longitude)
        .bind(bbox.max_longitude)
        .fetch_all(&self.pool)
        .await?;

        Ok(nearest_within_range(point, candidates))
    }

    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>> {
        let pattern = escape_like(&search_key(query));

        // LIKE only folds ASCII, so match against the pre-folded column.
        let gyms = query_as::<_, Gym>(
            r#"
            SELECT * FROM gyms
            WHERE title_search LIKE '%' || ? || '%' ESCAPE '\'
            ORDER BY rowid
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(pattern)
        .bind(i64::from(PAGE_SIZE))
        .bind(page_offset(page))
        .fetch_all(&self.pool)
        .await?;

        Ok(gyms)
    }
}

fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::store::in_memory::InMemoryGymRepository;
    use crate::model::store::test_utils::setup_test_db;

    fn gym(title: &str, latitude: f64, longitude: f64) -> GymForCreate {
        GymForCreate {
            title: title.to_string(),
            description: None,
            phone: None,
            latitude,
            longitude,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_gym() {
        let repo = SqliteGymRepository::new(setup_test_db().await);

        let created = repo
            .create(GymForCreate {
                description: Some("Open 24h".to_string()),
                phone: Some("+55 47 99999-0000".to_string()),
                ..gym("JavaScript Gym", -27.1382984, -48.6099812)
            })
            .await
            .unwrap();

        let found = repo.find_by_id(&created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_coordinates() {
        let repo = SqliteGymRepository::new(setup_test_db().await);

        let result = repo.create(gym("Nowhere Gym", 95.0, 0.0)).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_search_paginates() {
        let repo = SqliteGymRepository::new(setup_test_db().await);
        for i in 1..=22 {
            repo.create(gym(&format!("JavaScript Gym {i}"), -27.1382984, -48.6099812))
                .await
                .unwrap();
        }
        repo.create(gym("TypeScript Gym", -27.1382984, -48.6099812))
            .await
            .unwrap();

        let first = repo.search_many("javascript", 1).await.unwrap();
        let second = repo.search_many("JavaScript", 2).await.unwrap();

        assert_eq!(first.len(), 20);
        assert_eq!(first[0].title, "JavaScript Gym 1");
        let titles: Vec<_> = second.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["JavaScript Gym 21", "JavaScript Gym 22"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = SqliteGymRepository::new(setup_test_db().await);
        repo.create(gym("100% Fitness", 0.0, 0.0)).await.unwrap();
        repo.create(gym("Iron Gym", 0.0, 0.0)).await.unwrap();

        let gyms = repo.search_many("%", 1).await.unwrap();

        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].title, "100% Fitness");
    }

    #[tokio::test]
    async fn test_find_many_nearby() {
        let repo = SqliteGymRepository::new(setup_test_db().await);
        let near = repo.create(gym("Near Gym", -27.2092052, -49.6401091)).await.unwrap();
        repo.create(gym("Far Gym", -26.9021413, -48.6748931)).await.unwrap();

        let gyms = repo
            .find_many_nearby(Coordinate { latitude: -27.2092052, longitude: -49.6401091 })
            .await
            .unwrap();

        assert_eq!(gyms, vec![near]);
    }

    #[tokio::test]
    async fn test_find_many_nearby_orders_by_distance() {
        let repo = SqliteGymRepository::new(setup_test_db().await);
        let farther = repo.create(gym("Farther", -27.2096, -49.6401091)).await.unwrap();
        let closer = repo.create(gym("Closer", -27.2093, -49.6401091)).await.unwrap();

        let gyms = repo
            .find_many_nearby(Coordinate { latitude: -27.2092052, longitude: -49.6401091 })
            .await
            .unwrap();

        assert_eq!(gyms, vec![closer, farther]);
    }

    #[tokio::test]
    async fn test_search_folds_accented_titles() {
        let repo = SqliteGymRepository::new(setup_test_db().await);
        repo.create(gym("ACADEMIA AÇÃO", 0.0, 0.0)).await.unwrap();
        repo.create(gym("Academia Forma", 0.0, 0.0)).await.unwrap();

        let gyms = repo.search_many("ação", 1).await.unwrap();

        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].title, "ACADEMIA AÇÃO");
    }

    #[tokio::test]
    async fn test_search_matches_in_memory_backend() {
        let sqlite = SqliteGymRepository::new(setup_test_db().await);
        let memory = InMemoryGymRepository::new();
        let titles = ["ACADEMIA AÇÃO", "Ação Fitness", "Iron Gym", "ÉLAN Studio"];
        for title in titles {
            sqlite.create(gym(title, 0.0, 0.0)).await.unwrap();
            memory.create(gym(title, 0.0, 0.0)).await.unwrap();
        }

        for query in ["ação", "AÇÃO", "élan", "gym", "studio"] {
            let from_sqlite: Vec<_> = sqlite
                .search_many(query, 1)
                .await
                .unwrap()
                .into_iter()
                .map(|g| g.title)
                .collect();
            let from_memory: Vec<_> = memory
                .search_many(query, 1)
                .await
                .unwrap()
                .into_iter()
                .map(|g| g.title)
                .collect();

            assert_eq!(from_sqlite, from_memory, "query {query}");
        }
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("plain"), "plain");
    }
}
