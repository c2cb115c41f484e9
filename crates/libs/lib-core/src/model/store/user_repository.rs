//! # User Repository
//!
//! Provides database access layer for user-related operations.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{create_pool, SqliteUserRepository, UserRepository};
//! # use lib_core::model::UserForCreate;
//! # async fn example() -> lib_core::Result<()> {
//! let pool = create_pool("sqlite::memory:").await?;
//! let users = SqliteUserRepository::new(pool);
//!
//! let user = users
//!     .create(UserForCreate::member(
//!         "Alice".to_string(),
//!         "alice@example.com".to_string(),
//!         "hashed_password".to_string(),
//!     ))
//!     .await?;
//!
//! let found = users.find_by_email("alice@example.com").await?;
//! assert_eq!(found.map(|u| u.id), Some(user.id));
//! # Ok(())
//! # }
//! ```

use super::models::{User, UserForCreate};
use super::DbPool;
use crate::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::query_as;
use uuid::Uuid;

/// Storage contract for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. A taken email surfaces as [`AppError::Conflict`](crate::AppError::Conflict).
    async fn create(&self, data: UserForCreate) -> Result<User>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// SQLite implementation of [`UserRepository`].
#[derive(Clone, Debug)]
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, data: UserForCreate) -> Result<User> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, role, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let user = query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&id)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::store::models::Role;
    use crate::model::store::test_utils::setup_test_db;

    fn john() -> UserForCreate {
        UserForCreate::member(
            "John Doe".to_string(),
            "johndoe@example.com".to_string(),
            "$argon2id$v=19$m=19456,t=2,p=1$hash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_user() {
        let repo = SqliteUserRepository::new(setup_test_db().await);

        let user = repo.create(john()).await.unwrap();

        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "johndoe@example.com");
        assert_eq!(user.role, Role::Member);
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[tokio::test]
    async fn test_create_admin_keeps_role() {
        let repo = SqliteUserRepository::new(setup_test_db().await);

        let user = repo
            .create(UserForCreate { role: Role::Admin, ..john() })
            .await
            .unwrap();

        let found = repo.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(found.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let repo = SqliteUserRepository::new(setup_test_db().await);

        repo.create(john()).await.unwrap();
        let result = repo.create(john()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = SqliteUserRepository::new(setup_test_db().await);
        let user = repo.create(john()).await.unwrap();

        let found = repo.find_by_email("johndoe@example.com").await.unwrap();
        assert_eq!(found, Some(user));

        let missing = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = SqliteUserRepository::new(setup_test_db().await);

        let found = repo.find_by_id(&Uuid::new_v4().to_string()).await.unwrap();

        assert!(found.is_none());
    }
}
