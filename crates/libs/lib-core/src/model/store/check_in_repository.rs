//! # Check-in Repository
//!
//! Check-in persistence and the per-user queries behind history, metrics
//! and the once-per-day rule.
//!
//! Each row stores, next to the creation instant, the calendar day of that
//! instant in the offset the caller supplied (`check_in_day`). The unique
//! index over `(user_id, gym_id, check_in_day)` rejects a second check-in at
//! the same gym on the same day even when two requests race. Lookups by day
//! go through `created_at` instead, so they honor whatever offset the
//! caller passes.

use super::models::{CheckIn, CheckInForCreate};
use super::{page_offset, DbPool, PAGE_SIZE};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use lib_utils::day_bounds;
use sqlx::query_as;
use uuid::Uuid;

/// Storage contract for check-ins.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Insert an unvalidated check-in created at `data.created_at`.
    ///
    /// A second check-in of the same user at the same gym on the same
    /// calendar day fails with [`AppError::Conflict`].
    async fn create(&self, data: CheckInForCreate) -> Result<CheckIn>;

    async fn find_by_id(&self, id: &str) -> Result<Option<CheckIn>>;

    /// Any check-in of the user created on the calendar day of `date`,
    /// read in `date`'s offset.
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: DateTime<FixedOffset>,
    ) -> Result<Option<CheckIn>>;

    async fn count_by_user_id(&self, user_id: &str) -> Result<u64>;

    /// [`PAGE_SIZE`] check-ins per 1-indexed page, in creation order.
    async fn find_many_by_user_id(&self, user_id: &str, page: u32) -> Result<Vec<CheckIn>>;

    /// Persist a mutated check-in. Fails with [`AppError::ResourceNotFound`]
    /// if it was never stored.
    async fn save(&self, check_in: CheckIn) -> Result<CheckIn>;
}

/// Text form of a calendar day as stored in `check_in_day`.
fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Text form of an instant as returned by SQLite's `datetime()`.
fn sql_datetime(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// SQLite implementation of [`CheckInRepository`].
#[derive(Clone, Debug)]
pub struct SqliteCheckInRepository {
    pool: DbPool,
}

impl SqliteCheckInRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInRepository for SqliteCheckInRepository {
    async fn create(&self, data: CheckInForCreate) -> Result<CheckIn> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO check_ins (id, user_id, gym_id, created_at, check_in_day) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&data.user_id)
        .bind(&data.gym_id)
        .bind(data.created_at.with_timezone(&Utc))
        .bind(day_key(data.created_at.date_naive()))
        .execute(&self.pool)
        .await?;

        let check_in = query_as::<_, CheckIn>(
            "SELECT id, user_id, gym_id, created_at, validated_at FROM check_ins WHERE id = ?",
        )
        .bind(&id)
        .fetch_one(&self.pool)
        .await?;

        Ok(check_in)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CheckIn>> {
        let check_in = query_as::<_, CheckIn>(
            "SELECT id, user_id, gym_id, created_at, validated_at FROM check_ins WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(check_in)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: DateTime<FixedOffset>,
    ) -> Result<Option<CheckIn>> {
        let (start, end) = day_bounds(date);

        // datetime() normalizes the stored RFC3339 text to whole UTC seconds,
        // which compares correctly against whole-second bounds.
        let check_in = query_as::<_, CheckIn>(
            r#"
            SELECT id, user_id, gym_id, created_at, validated_at FROM check_ins
            WHERE user_id = ?
              AND datetime(created_at) >= ?
              AND datetime(created_at) < ?
            ORDER BY rowid
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(sql_datetime(start))
        .bind(sql_datetime(end))
        .fetch_optional(&self.pool)
        .await?;

        Ok(check_in)
    }

    async fn count_by_user_id(&self, user_id: &str) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM check_ins WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        u64::try_from(count).map_err(|e| AppError::Database(e.to_string()))
    }

    async fn find_many_by_user_id(&self, user_id: &str, page: u32) -> Result<Vec<CheckIn>> {
        let check_ins = query_as::<_, CheckIn>(
            r#"
            SELECT id, user_id, gym_id, created_at, validated_at FROM check_ins
            WHERE user_id = ?
            ORDER BY rowid
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(i64::from(PAGE_SIZE))
        .bind(page_offset(page))
        .fetch_all(&self.pool)
        .await?;

        Ok(check_ins)
    }

    async fn save(&self, check_in: CheckIn) -> Result<CheckIn> {
        let result = sqlx::query("UPDATE check_ins SET validated_at = ? WHERE id = ?")
            .bind(check_in.validated_at)
            .bind(&check_in.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::ResourceNotFound);
        }

        Ok(check_in)
    }
}
