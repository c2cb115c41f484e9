use super::paginate;
use crate::error::{AppError, Result};
use crate::model::store::check_in_repository::CheckInRepository;
use crate::model::store::models::{CheckIn, CheckInForCreate};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use lib_utils::local_day;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug)]
struct StoredCheckIn {
    check_in: CheckIn,
    /// Calendar day of creation in the offset the caller supplied.
    day: NaiveDate,
}

#[derive(Debug, Default)]
pub struct InMemoryCheckInRepository {
    items: RwLock<Vec<StoredCheckIn>>,
}

impl InMemoryCheckInRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn create(&self, data: CheckInForCreate) -> Result<CheckIn> {
        let day = data.created_at.date_naive();
        let mut items = self.items.write().await;

        let taken = items.iter().any(|s| {
            s.check_in.user_id == data.user_id && s.check_in.gym_id == data.gym_id && s.day == day
        });
        if taken {
            return Err(AppError::Conflict(
                "UNIQUE constraint failed: check_ins.user_id, check_ins.gym_id, check_ins.check_in_day"
                    .to_string(),
            ));
        }

        let check_in = CheckIn {
            id: Uuid::new_v4().to_string(),
            user_id: data.user_id,
            gym_id: data.gym_id,
            created_at: data.created_at.with_timezone(&Utc),
            validated_at: None,
        };
        items.push(StoredCheckIn { check_in: check_in.clone(), day });

        Ok(check_in)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CheckIn>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|s| s.check_in.id == id).map(|s| s.check_in.clone()))
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: DateTime<FixedOffset>,
    ) -> Result<Option<CheckIn>> {
        let day = date.date_naive();
        let items = self.items.read().await;

        let found = items.iter().find(|s| {
            s.check_in.user_id == user_id
                && local_day(s.check_in.created_at, *date.offset()) == day
        });

        Ok(found.map(|s| s.check_in.clone()))
    }

    async fn count_by_user_id(&self, user_id: &str) -> Result<u64> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|s| s.check_in.user_id == user_id).count() as u64)
    }

    async fn find_many_by_user_id(&self, user_id: &str, page: u32) -> Result<Vec<CheckIn>> {
        let items = self.items.read().await;

        let mine = items
            .iter()
            .filter(|s| s.check_in.user_id == user_id)
            .map(|s| s.check_in.clone());

        Ok(paginate(mine, page))
    }

    async fn save(&self, check_in: CheckIn) -> Result<CheckIn> {
        let mut items = self.items.write().await;

        let stored = items
            .iter_mut()
            .find(|s| s.check_in.id == check_in.id)
            .ok_or(AppError::ResourceNotFound)?;
        stored.check_in = check_in.clone();

        Ok(check_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn for_create(gym_id: &str, created_at: DateTime<FixedOffset>) -> CheckInForCreate {
        CheckInForCreate {
            gym_id: gym_id.to_string(),
            user_id: "user-01".to_string(),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_unique_per_gym_and_day() {
        let repo = InMemoryCheckInRepository::new();
        let morning = brt().with_ymd_and_hms(2024, 1, 20, 8, 0, 0).unwrap();

        repo.create(for_create("gym-01", morning)).await.unwrap();

        let again = repo.create(for_create("gym-01", morning + Duration::hours(10))).await;
        assert!(matches!(again, Err(AppError::Conflict(_))));

        assert!(repo.create(for_create("gym-02", morning)).await.is_ok());
        assert!(repo.create(for_create("gym-01", morning + Duration::days(1))).await.is_ok());
    }

    #[tokio::test]
    async fn test_find_on_date_uses_offset_of_date() {
        let repo = InMemoryCheckInRepository::new();
        let late_evening = brt().with_ymd_and_hms(2024, 1, 20, 22, 30, 0).unwrap();
        let created = repo.create(for_create("gym-01", late_evening)).await.unwrap();

        let same_day = brt().with_ymd_and_hms(2024, 1, 20, 7, 0, 0).unwrap();
        assert_eq!(
            repo.find_by_user_id_on_date("user-01", same_day).await.unwrap(),
            Some(created)
        );

        // In UTC the check-in happened on the 21st.
        let utc_next_day = Utc.with_ymd_and_hms(2024, 1, 21, 12, 0, 0).unwrap().fixed_offset();
        assert!(repo
            .find_by_user_id_on_date("user-01", utc_next_day)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_save_unknown_check_in() {
        let repo = InMemoryCheckInRepository::new();
        let ghost = CheckIn {
            id: "missing".to_string(),
            user_id: "user-01".to_string(),
            gym_id: "gym-01".to_string(),
            created_at: Utc::now(),
            validated_at: None,
        };

        assert_eq!(repo.save(ghost).await, Err(AppError::ResourceNotFound));
    }
}
