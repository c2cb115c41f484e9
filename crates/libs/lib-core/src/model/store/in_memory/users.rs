use crate::error::{AppError, Result};
use crate::model::store::models::{User, UserForCreate};
use crate::model::store::user_repository::UserRepository;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    items: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, data: UserForCreate) -> Result<User> {
        let mut items = self.items.write().await;

        if items.iter().any(|u| u.email == data.email) {
            return Err(AppError::Conflict("UNIQUE constraint failed: users.email".to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            created_at: Utc::now(),
        };
        items.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        let data = UserForCreate::member(
            "John Doe".to_string(),
            "johndoe@example.com".to_string(),
            "hash".to_string(),
        );

        let user = repo.create(data.clone()).await.unwrap();
        assert!(matches!(repo.create(data).await, Err(AppError::Conflict(_))));

        assert_eq!(repo.find_by_id(&user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(repo.find_by_email("johndoe@example.com").await.unwrap(), Some(user));
    }
}
